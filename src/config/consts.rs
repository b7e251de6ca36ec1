// src/config/consts.rs

// Net config
pub const GROUPS_URL: &str = "https://celestrak.org/NORAD/elements/";
pub const USER_AGENT: &str = concat!("celestrak_groups/", env!("CARGO_PKG_VERSION"));

// Link parsing: `gp.php?GROUP=<id>&FORMAT=tle`
pub const GROUP_PARAM_SEP: char = '=';
pub const QUERY_SEP: char = '&';

// Swift output
pub const ENUM_NAME: &str = "CelesTrakGroup";
pub const ENUM_CONFORMANCES: &str = "String, CaseIterable, Identifiable";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "celestrak_groups=info";
