//! Widget instance: preferences, clock and click handling
//!
//! Each click maps to exactly one slot write. The host re-renders after
//! every write; [`DateWidget::needs_render`] reports that a pass is due.

use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use crate::error::WidgetError;
use crate::format::{DateFormat, DayFormat};
use crate::render::{self, Node};
use crate::state::{PreferenceStore, Preferences, StateStore};
use crate::theme::Color;

/// Click target payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Main date row
    ToggleMenu,
    SelectDateFormat(DateFormat),
    SelectDayFormat(DayFormat),
    /// Color swatch, carrying its fill
    SelectColor(Color),
    /// "Minimize widget" button
    Minimize,
}

impl FromStr for Action {
    type Err = WidgetError;

    /// Parse `toggle`, `minimize`, `date=<label>`, `day=<label>` or `color=<hex>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => return Ok(Action::ToggleMenu),
            "minimize" => return Ok(Action::Minimize),
            _ => {}
        }

        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| WidgetError::UnknownAction(s.to_string()))?;
        match kind {
            "date" => Ok(Action::SelectDateFormat(value.parse()?)),
            "day" => Ok(Action::SelectDayFormat(value.parse()?)),
            "color" => Color::from_hex(value)
                .map(Action::SelectColor)
                .ok_or_else(|| WidgetError::UnknownAction(s.to_string())),
            _ => Err(WidgetError::UnknownAction(s.to_string())),
        }
    }
}

/// Apply one click to the preference slots
pub fn apply<S: StateStore>(prefs: &mut PreferenceStore<S>, action: Action) {
    match action {
        Action::ToggleMenu => {
            let open = prefs.menu_open();
            prefs.set_menu_open(!open);
        }
        Action::SelectDateFormat(format) => prefs.set_date_format(format),
        Action::SelectDayFormat(format) => prefs.set_day_format(format),
        Action::SelectColor(fill) => prefs.set_color_value(&fill.hex()),
        Action::Minimize => prefs.set_menu_open(false),
    }
}

/// Source of "now", read once per render pass
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Host local time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// One widget instance bound to a host state store
pub struct DateWidget<S, C = LocalClock> {
    prefs: PreferenceStore<S>,
    clock: C,
    needs_render: bool,
    /// Instant sampled by the last render pass
    rendered_at: Option<NaiveDateTime>,
}

impl<S: StateStore, C: Clock> DateWidget<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        info!("Date widget created");
        Self {
            prefs: PreferenceStore::new(store),
            clock,
            needs_render: true,
            rendered_at: None,
        }
    }

    /// Current preference snapshot
    pub fn preferences(&self) -> Preferences {
        self.prefs.snapshot()
    }

    pub fn store(&self) -> &S {
        self.prefs.store()
    }

    /// Typed view of the host store
    pub fn preference_store(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    /// Whether a state write happened since the last render
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Produce the visual tree for this pass
    pub fn render(&mut self) -> Node {
        let now = self.clock.now();
        let prefs = self.prefs.snapshot();
        debug!(
            "Render pass at {} (menu {})",
            now,
            if prefs.menu_open { "open" } else { "closed" }
        );
        self.needs_render = false;
        self.rendered_at = Some(now);
        render::render(&now, &prefs)
    }

    /// Text of the main row for the current preferences.
    ///
    /// Uses the instant of the last render pass so the label agrees with the
    /// tree; before the first pass the clock is sampled.
    pub fn label(&self) -> String {
        let now = self.rendered_at.unwrap_or_else(|| self.clock.now());
        render::primary_label(&now, &self.prefs.snapshot())
    }

    /// Handle a click on one of the tree's click targets
    pub fn click(&mut self, action: Action) {
        debug!("Click: {:?}", action);
        apply(&mut self.prefs, action);
        self.needs_render = true;
    }

    /// Drop the widget, handing back the host store
    pub fn into_store(self) -> S {
        self.prefs.into_inner()
    }
}
