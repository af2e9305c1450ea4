//! Synced widget state
//!
//! The host owns persistence; the widget only reads and writes four named
//! slots through [`StateStore`]. [`PreferenceStore`] layers typed access on
//! top of any store and recovers from values it cannot decode.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::WidgetResult;
use crate::format::{DateFormat, DayFormat};
use crate::theme::{default_color_value, resolve_color, ColorOption};

/// The four synced-state slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    DateFormat,
    DayFormat,
    MenuOpen,
    WidgetColor,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::DateFormat, Slot::DayFormat, Slot::MenuOpen, Slot::WidgetColor];

    /// Key the host stores this slot under
    pub fn key(&self) -> &'static str {
        match self {
            Slot::DateFormat => "dateFormat",
            Slot::DayFormat => "dayFormat",
            Slot::MenuOpen => "isMenuOpen",
            Slot::WidgetColor => "widgetColor",
        }
    }
}

/// Host-provided key/value state, scoped to one widget instance
pub trait StateStore {
    /// Last value written under `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: Value);

    /// Read `key`, or `default` when nothing has been written yet
    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }
}

impl<T: StateStore + ?Sized> StateStore for Box<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        (**self).set(key, value)
    }
}

/// In-process state, lost when the widget is dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.slots.insert(key.to_string(), value);
    }
}

/// State persisted to a TOML file, written through on every `set`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: BTreeMap<String, Value>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = match Self::read_slots(&path) {
            Ok(slots) => slots,
            Err(e) => {
                warn!("Failed to read widget state from {:?}, starting empty: {}", path, e);
                BTreeMap::new()
            }
        };
        debug!("Widget state opened at {:?} ({} slots)", path, slots.len());
        Self { path, slots }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(path: &Path) -> WidgetResult<BTreeMap<String, Value>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write all slots to disk
    pub fn save(&self) -> WidgetResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.slots)?;
        std::fs::write(&self.path, content)?;
        debug!("Widget state saved to {:?}", self.path);
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        // One value TOML can't hold would fail every later save
        if let Err(e) = toml::Value::try_from(&value) {
            warn!("Dropping write to slot {}, not storable as TOML: {}", key, e);
            return;
        }
        self.slots.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            warn!("Failed to persist slot {}: {}", key, e);
        }
    }
}

/// Snapshot of all preferences for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub date_format: DateFormat,
    pub day_format: DayFormat,
    pub menu_open: bool,
    /// Raw stored fill hex; see [`Preferences::color`]
    pub color_value: String,
}

impl Preferences {
    /// Catalog entry for the stored color, first entry if it is stale
    pub fn color(&self) -> &'static ColorOption {
        resolve_color(&self.color_value)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            day_format: DayFormat::default(),
            menu_open: false,
            color_value: default_color_value(),
        }
    }
}

/// Typed access to the preference slots of a [`StateStore`]
#[derive(Debug)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: StateStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn read<T: DeserializeOwned>(&self, slot: Slot, default: T) -> T {
        let Some(value) = self.store.get(slot.key()) else {
            return default;
        };
        match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Ignoring invalid value in slot {}: {}", slot.key(), e);
                default
            }
        }
    }

    fn write<T: Serialize>(&mut self, slot: Slot, value: T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                debug!("Slot {} <- {}", slot.key(), value);
                self.store.set(slot.key(), value);
            }
            Err(e) => warn!("Failed to encode slot {}: {}", slot.key(), e),
        }
    }

    pub fn date_format(&self) -> DateFormat {
        self.read(Slot::DateFormat, DateFormat::default())
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        self.write(Slot::DateFormat, format);
    }

    pub fn day_format(&self) -> DayFormat {
        self.read(Slot::DayFormat, DayFormat::default())
    }

    pub fn set_day_format(&mut self, format: DayFormat) {
        self.write(Slot::DayFormat, format);
    }

    pub fn menu_open(&self) -> bool {
        self.read(Slot::MenuOpen, false)
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.write(Slot::MenuOpen, open);
    }

    pub fn color_value(&self) -> String {
        self.read(Slot::WidgetColor, default_color_value())
    }

    pub fn set_color_value(&mut self, value: &str) {
        self.write(Slot::WidgetColor, value);
    }

    /// Slots the host has a value for; the rest read as defaults
    pub fn stored_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.store.get(slot.key()).is_some())
            .collect()
    }

    /// Read every slot at once
    pub fn snapshot(&self) -> Preferences {
        Preferences {
            date_format: self.date_format(),
            day_format: self.day_format(),
            menu_open: self.menu_open(),
            color_value: self.color_value(),
        }
    }
}
