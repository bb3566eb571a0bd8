//! Fixed tokens of the spacer config format.
//!
//! Accepted property, option and file-type tokens are the `ALL` tables of
//! [`CssProperty`](crate::CssProperty), [`SpacingOption`](crate::SpacingOption)
//! and [`FileType`](crate::FileType).

/// Breakpoint key whose value applies without a media condition.
pub const DEFAULT_BREAKPOINT: &str = "default";

/// Suffix every spacer value must carry.
pub const SPACER_UNIT: &str = "px";

/// Output file stem used when the config does not name one.
pub const DEFAULT_FILENAME: &str = "spacers";
