/// Minutes in one day. Every partition sums to exactly this.
pub const DAY_MINUTES: u32 = 1440;

/// Fill color for time with no scheduled task, unless configured otherwise.
pub const DEFAULT_UNCOVERED_COLOR: &str = "#eeeeee";
