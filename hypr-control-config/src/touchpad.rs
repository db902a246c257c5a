use hypr_control_ipc::Transport;

use crate::options::{BoolOption, Choice, FloatOption};
use crate::store::OptionStore;

pub const ENABLED: BoolOption = BoolOption::new("input:touchpad:enabled", true);
pub const TOUCHSCREEN_ENABLED: BoolOption = BoolOption::new("input:touchdevice:enabled", true);

pub const TAP_TO_CLICK: BoolOption = BoolOption::new("input:touchpad:tap-to-click", true);
pub const TAP_AND_DRAG: BoolOption = BoolOption::new("input:touchpad:tap-and-drag", true);
pub const DRAG_LOCK: BoolOption = BoolOption::new("input:touchpad:drag_lock", false);
pub const MIDDLE_BUTTON_EMULATION: BoolOption =
    BoolOption::new("input:touchpad:middle_button_emulation", false);

pub const NATURAL_SCROLL: BoolOption = BoolOption::new("input:touchpad:natural_scroll", true);
pub const SCROLL_FACTOR: FloatOption = FloatOption::new("input:touchpad:scroll_factor", 1., 2);

pub const DISABLE_WHILE_TYPING: BoolOption =
    BoolOption::new("input:touchpad:disable_while_typing", true);

/// How right and middle clicks are told apart, stored as `input:touchpad:clickfinger_behavior`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ClickMethod {
    ButtonAreas,
    #[default]
    Clickfinger,
}

impl Choice for ClickMethod {
    const LABELS: &'static [&'static str] = &["Button Areas", "Clickfinger"];

    fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::ButtonAreas),
            1 => Some(Self::Clickfinger),
            _ => None,
        }
    }

    fn index(self) -> u32 {
        self as u32
    }

    fn read<T: Transport>(store: &OptionStore<T>) -> Option<Self> {
        let value = store.read_int(
            "input:touchpad:clickfinger_behavior",
            Self::default().index() as i32,
        );
        u32::try_from(value).ok().and_then(Self::from_index)
    }

    fn write<T: Transport>(self, store: &OptionStore<T>) {
        store.write("input:touchpad:clickfinger_behavior", self.index() as i32);
    }
}
