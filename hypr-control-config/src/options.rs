//! Typed option definitions, each pairing an option path with how it is read and written.

use hypr_control_ipc::Transport;

use crate::store::{OptionStore, OptionValue};

/// Option shown as an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoolOption {
    pub path: &'static str,
    pub default: bool,
}

/// Option holding a whole number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntOption {
    pub path: &'static str,
    pub default: i32,
}

/// Option holding a fractional number, written with `precision` decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatOption {
    pub path: &'static str,
    pub default: f64,
    pub precision: usize,
}

/// Integer option shown as an on/off switch, on exactly when it holds `on`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntSwitchOption {
    pub path: &'static str,
    pub default: i32,
    pub on: i32,
    pub off: i32,
}

impl BoolOption {
    pub const fn new(path: &'static str, default: bool) -> Self {
        Self { path, default }
    }

    pub fn get<T: Transport>(&self, store: &OptionStore<T>) -> bool {
        store.read_bool(self.path, self.default)
    }

    pub fn set<T: Transport>(&self, store: &OptionStore<T>, value: bool) {
        store.write(self.path, value);
    }
}

impl IntOption {
    pub const fn new(path: &'static str, default: i32) -> Self {
        Self { path, default }
    }

    pub fn get<T: Transport>(&self, store: &OptionStore<T>) -> i32 {
        store.read_int(self.path, self.default)
    }

    pub fn set<T: Transport>(&self, store: &OptionStore<T>, value: i32) {
        store.write(self.path, value);
    }
}

impl FloatOption {
    pub const fn new(path: &'static str, default: f64, precision: usize) -> Self {
        Self {
            path,
            default,
            precision,
        }
    }

    pub fn get<T: Transport>(&self, store: &OptionStore<T>) -> f64 {
        store.read_float(self.path, self.default)
    }

    pub fn set<T: Transport>(&self, store: &OptionStore<T>, value: f64) {
        store.write(self.path, OptionValue::float(value, self.precision));
    }
}

impl IntSwitchOption {
    pub fn get<T: Transport>(&self, store: &OptionStore<T>) -> bool {
        store.read_int(self.path, self.default) == self.on
    }

    pub fn set<T: Transport>(&self, store: &OptionStore<T>, value: bool) {
        store.write(self.path, if value { self.on } else { self.off });
    }
}

/// Option presented as a fixed list of choices.
pub trait Choice: Copy + Sized + 'static {
    /// Labels of all choices, in display order.
    const LABELS: &'static [&'static str];

    fn from_index(index: u32) -> Option<Self>;

    fn index(self) -> u32;

    /// Reads the current choice.
    ///
    /// `None` means the current value matches no choice; the first one should be shown.
    fn read<T: Transport>(store: &OptionStore<T>) -> Option<Self>;

    /// Writes the choice. Some choices, like "Default", write nothing.
    fn write<T: Transport>(self, store: &OptionStore<T>);
}
