//! CSS declaration building shared by every emitter.

use crate::models::{CssProperty, SpacingOption};

/// Build the `property: value;` text for one option.
///
/// `-x` and `-y` expand to two declarations; every other option is appended
/// directly to the property name.
pub fn build_declaration(property: CssProperty, option: SpacingOption, value: &str) -> String {
    let name = property.name();
    match option {
        SpacingOption::X => format!("{name}-left: {value}; {name}-right: {value};"),
        SpacingOption::Y => format!("{name}-bottom: {value}; {name}-top: {value};"),
        other => format!("{name}{other}: {value};"),
    }
}

/// Declarations as `(property, value)` pairs, for structured output.
pub fn declaration_entries(
    property: CssProperty,
    option: SpacingOption,
    value: &str,
) -> Vec<(String, String)> {
    let name = property.name();
    match option {
        SpacingOption::Y => vec![
            (format!("{name}-top"), value.to_string()),
            (format!("{name}-bottom"), value.to_string()),
        ],
        SpacingOption::X => vec![
            (format!("{name}-left"), value.to_string()),
            (format!("{name}-right"), value.to_string()),
        ],
        other => vec![(format!("{name}{other}"), value.to_string())],
    }
}

/// Class selector for a property, option and scale key, e.g. `.m-top-S`.
pub fn selector(property: CssProperty, option: SpacingOption, scale_key: &str) -> String {
    format!(".{}{}-{}", property.shorthand(), option, scale_key)
}
