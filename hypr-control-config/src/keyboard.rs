use crate::options::{BoolOption, IntOption};

/// Comma-separated list of active layouts, the first one being the primary layout.
pub const KB_LAYOUT: &str = "input:kb_layout";

pub const REPEAT_RATE: IntOption = IntOption::new("input:repeat_rate", 25);
pub const REPEAT_DELAY: IntOption = IntOption::new("input:repeat_delay", 600);

pub const NUMLOCK_BY_DEFAULT: BoolOption = BoolOption::new("input:numlock_by_default", false);
pub const RESOLVE_BINDS_BY_SYM: BoolOption = BoolOption::new("input:resolve_binds_by_sym", false);
