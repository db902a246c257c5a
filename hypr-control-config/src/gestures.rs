use hypr_control_ipc::Transport;

use crate::options::{BoolOption, Choice, IntOption};
use crate::store::OptionStore;

pub const WORKSPACE_SWIPE: BoolOption = BoolOption::new("gestures:workspace_swipe", true);
pub const WORKSPACE_SWIPE_DISTANCE: IntOption =
    IntOption::new("gestures:workspace_swipe_distance", 300);
pub const WORKSPACE_SWIPE_INVERT: BoolOption =
    BoolOption::new("gestures:workspace_swipe_invert", true);
pub const WORKSPACE_SWIPE_FOREVER: BoolOption =
    BoolOption::new("gestures:workspace_swipe_forever", false);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SwipeFingers {
    #[default]
    Three,
    Four,
}

impl SwipeFingers {
    pub fn count(self) -> i32 {
        match self {
            SwipeFingers::Three => 3,
            SwipeFingers::Four => 4,
        }
    }
}

impl Choice for SwipeFingers {
    const LABELS: &'static [&'static str] = &["3 Fingers", "4 Fingers"];

    fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Three),
            1 => Some(Self::Four),
            _ => None,
        }
    }

    fn index(self) -> u32 {
        self as u32
    }

    /// Anything other than four fingers shows as three.
    fn read<T: Transport>(store: &OptionStore<T>) -> Option<Self> {
        let count = store.read_int("gestures:workspace_swipe_fingers", 3);
        Some(if count == 4 { Self::Four } else { Self::Three })
    }

    fn write<T: Transport>(self, store: &OptionStore<T>) {
        store.write("gestures:workspace_swipe_fingers", self.count());
    }
}
