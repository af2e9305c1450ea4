//! Date widget - shows today's date and weekday in a chosen format and color
//!
//! The crate is host-agnostic: preferences live in a host-provided
//! [`state::StateStore`], and [`render::render`] returns a declarative tree
//! whose click targets carry [`widget::Action`]s back to
//! [`widget::DateWidget::click`].

pub mod config;
pub mod error;
pub mod format;
pub mod render;
pub mod state;
pub mod theme;
pub mod widget;

pub use error::{WidgetError, WidgetResult};
pub use format::{format_date, format_day_of_week, DateFormat, DayFormat};
pub use state::{FileStore, MemoryStore, PreferenceStore, Preferences, StateStore};
pub use theme::{resolve_color, ColorOption, COLOR_CATALOG};
pub use widget::{Action, Clock, DateWidget, FixedClock, LocalClock};
