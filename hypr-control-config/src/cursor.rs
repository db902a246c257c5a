use crate::options::{BoolOption, FloatOption, IntOption};

/// Seconds of inactivity before the cursor hides; 0 disables hiding.
pub const INACTIVE_TIMEOUT: IntOption = IntOption::new("cursor:inactive_timeout", 0);
pub const ZOOM_FACTOR: FloatOption = FloatOption::new("cursor:zoom_factor", 1., 1);
pub const HIDE_ON_KEY_PRESS: BoolOption = BoolOption::new("cursor:hide_on_key_press", false);
pub const HIDE_ON_TOUCH: BoolOption = BoolOption::new("cursor:hide_on_touch", false);
