//! Config validation.
//!
//! Checks run in a fixed order (properties, options, spacers, file types) and
//! stop at the first failing rule. A config that passes every check comes out
//! as a typed [`SpacerConfig`]. Fields arrive untyped, so a field of the wrong
//! shape fails here with the same error as a wrong value.

use serde_json::Value;
use tracing::debug;

use crate::constants::{DEFAULT_BREAKPOINT, DEFAULT_FILENAME, SPACER_UNIT};
use crate::error::ValidationError;
use crate::models::{
    CssProperty, FileType, RawConfig, Spacer, SpacerConfig, SpacingOption, SpacingScale,
};

/// Validator for spacer configs.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a raw config, returning the typed config on success.
    pub fn validate(raw: &RawConfig) -> Result<SpacerConfig, ValidationError> {
        let properties = Self::validate_properties(raw.properties.as_ref())?;
        let options = Self::validate_options(raw.options.as_ref())?;
        let spacers = Self::validate_spacers(raw.spacers.as_ref())?;
        let file_types = Self::validate_file_types(raw.file_types.as_ref())?;

        let filename = raw
            .filename
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILENAME)
            .to_string();

        debug!(
            "Config valid: {} properties, {} options, {} spacers, {} file types",
            properties.len(),
            options.len(),
            spacers.len(),
            file_types.len()
        );

        Ok(SpacerConfig {
            properties,
            options,
            spacers,
            file_types,
            filename,
        })
    }

    /// Every entry must be exactly `margin` or `padding`.
    pub fn validate_properties(
        properties: Option<&Value>,
    ) -> Result<Vec<CssProperty>, ValidationError> {
        let parsed = tokens(
            properties,
            ValidationError::MissingProperties,
            ValidationError::InvalidProperty,
        )?
        .into_iter()
        .map(|p| {
            CssProperty::from_token(p).ok_or_else(|| ValidationError::InvalidProperty(p.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(dedup(parsed))
    }

    /// Every entry must be one of [`SpacingOption::ALL`].
    pub fn validate_options(
        options: Option<&Value>,
    ) -> Result<Vec<SpacingOption>, ValidationError> {
        let invalid = |option: String| ValidationError::InvalidOption {
            option,
            valid: valid_list(SpacingOption::ALL.iter().map(SpacingOption::token)),
        };

        let parsed = tokens(options, ValidationError::MissingOptions, invalid)?
            .into_iter()
            .map(|o| SpacingOption::from_token(o).ok_or_else(|| invalid(o.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dedup(parsed))
    }

    /// Every spacer needs a `default` breakpoint and `px` string values.
    ///
    /// Anything other than a non-empty map counts as missing spacers.
    pub fn validate_spacers(spacers: Option<&Value>) -> Result<SpacingScale, ValidationError> {
        let spacers = spacers
            .and_then(Value::as_object)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingSpacers)?;

        spacers
            .iter()
            .map(|(key, breakpoints)| Self::validate_spacer(key, breakpoints))
            .collect()
    }

    fn validate_spacer(key: &str, breakpoints: &Value) -> Result<Spacer, ValidationError> {
        let breakpoints = breakpoints
            .as_object()
            .ok_or_else(|| ValidationError::InvalidSpacer(key.to_string()))?;

        if !breakpoints.contains_key(DEFAULT_BREAKPOINT) {
            return Err(ValidationError::MissingDefaultBreakpoint(key.to_string()));
        }

        let values = breakpoints
            .iter()
            .map(|(breakpoint, value)| {
                let value = value
                    .as_str()
                    .ok_or_else(|| ValidationError::NonStringSpacerValue {
                        spacer: key.to_string(),
                        breakpoint: breakpoint.clone(),
                    })?;

                if !value.ends_with(SPACER_UNIT) {
                    return Err(ValidationError::InvalidSpacerUnit {
                        spacer: key.to_string(),
                        breakpoint: breakpoint.clone(),
                        value: value.to_string(),
                    });
                }

                Ok((breakpoint.clone(), value.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Spacer::from_breakpoints(key, values))
    }

    /// Every entry must be one of [`FileType::ALL`].
    pub fn validate_file_types(
        file_types: Option<&Value>,
    ) -> Result<Vec<FileType>, ValidationError> {
        let invalid = |file_type: String| ValidationError::InvalidFileType {
            file_type,
            valid: valid_list(FileType::ALL.iter().map(FileType::extension)),
        };

        let parsed = tokens(file_types, ValidationError::MissingFileTypes, invalid)?
            .into_iter()
            .map(|t| FileType::from_token(t).ok_or_else(|| invalid(t.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dedup(parsed))
    }
}

/// String entries of a list field.
///
/// A missing, null or empty list yields `missing`. A field that is not a list,
/// or an entry that is not a string, is passed to `invalid` in JSON form.
fn tokens<'a>(
    field: Option<&'a Value>,
    missing: ValidationError,
    invalid: impl Fn(String) -> ValidationError,
) -> Result<Vec<&'a str>, ValidationError> {
    let items = match field {
        None | Some(Value::Null) => return Err(missing),
        Some(Value::Array(items)) if items.is_empty() => return Err(missing),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(invalid(other.to_string())),
    };

    items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| invalid(item.to_string())))
        .collect()
}

fn valid_list<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(",")
}

/// Drop repeated tokens, keeping first occurrences in order.
fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_raw() -> RawConfig {
        serde_json::from_value(json!({
            "properties": ["margin", "padding"],
            "options": ["-x", "-top"],
            "spacers": {
                "S": { "default": "4px", "768px": "8px" },
                "M": { "default": "8px" }
            },
            "file_types": ["css", "json"],
            "filename": "spacing"
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_valid_config() {
        let config = ConfigValidator::validate(&valid_raw()).unwrap();
        assert_eq!(config.properties, vec![CssProperty::Margin, CssProperty::Padding]);
        assert_eq!(config.options, vec![SpacingOption::X, SpacingOption::Top]);
        assert_eq!(config.file_types, vec![FileType::Css, FileType::Json]);
        assert_eq!(config.filename, "spacing");
        assert_eq!(config.spacers.keys().collect::<Vec<_>>(), vec!["S", "M"]);

        let small = config.spacers.get("S").unwrap();
        assert_eq!(small.default_value(), Some("4px"));
        assert_eq!(
            small.breakpoints,
            vec![
                ("default".to_string(), "4px".to_string()),
                ("768px".to_string(), "8px".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_properties() {
        let mut raw = valid_raw();
        raw.properties = None;
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingProperties)
        );

        raw.properties = Some(json!([]));
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingProperties)
        );

        raw.properties = Some(Value::Null);
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingProperties)
        );
    }

    #[test]
    fn test_property_must_match_exactly() {
        for bad in ["margin-top", "xmargin", "Padding", ""] {
            let mut raw = valid_raw();
            raw.properties = Some(json!(["margin", bad]));
            let err = ConfigValidator::validate(&raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidProperty(bad.to_string()));
            assert_eq!(err.field(), "properties");
        }
    }

    #[test]
    fn test_wrongly_shaped_properties() {
        let mut raw = valid_raw();
        raw.properties = Some(json!([1]));
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::InvalidProperty("1".into()))
        );

        raw.properties = Some(json!("margin"));
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::InvalidProperty("\"margin\"".into()))
        );
    }

    #[test]
    fn test_invalid_option() {
        let mut raw = valid_raw();
        raw.options = Some(json!(["-top", "-middle"]));
        let err = ConfigValidator::validate(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOption { ref option, .. } if option == "-middle"));
        assert!(err.to_string().contains("-x,-y,-top,-bottom,-left,-right"));
    }

    #[test]
    fn test_wrongly_shaped_options() {
        let mut raw = valid_raw();
        raw.options = Some(json!(["-top", null]));
        let err = ConfigValidator::validate(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOption { ref option, .. } if option == "null"));

        raw.options = Some(json!({ "-x": true }));
        let err = ConfigValidator::validate(&raw).unwrap_err();
        assert_eq!(err.field(), "options");
    }

    #[test]
    fn test_missing_options() {
        let mut raw = valid_raw();
        raw.options = Some(json!([]));
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingOptions)
        );
    }

    #[test]
    fn test_missing_spacers() {
        let mut raw = valid_raw();
        raw.spacers = Some(json!({}));
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingSpacers)
        );

        raw.spacers = None;
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingSpacers)
        );
    }

    #[test]
    fn test_spacers_must_be_a_map() {
        for bad in [json!([]), json!(["S"]), json!("4px"), json!(4)] {
            let mut raw = valid_raw();
            raw.spacers = Some(bad.clone());
            assert_eq!(
                ConfigValidator::validate(&raw),
                Err(ValidationError::MissingSpacers),
                "spacers {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_spacer_without_default_fails() {
        let spacers = json!({ "S": { "768px": "8px", "1200px": "12px" } });
        let err = ConfigValidator::validate_spacers(Some(&spacers)).unwrap_err();
        assert_eq!(err, ValidationError::MissingDefaultBreakpoint("S".into()));
    }

    #[test]
    fn test_spacer_values_need_px_suffix() {
        for bad in ["22", "22pt", "22pxfoo", "px22"] {
            let spacers = json!({ "S": { "default": bad } });
            let err = ConfigValidator::validate_spacers(Some(&spacers)).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidSpacerUnit { ref value, .. } if value == bad),
                "expected {bad} to be rejected"
            );
        }

        for good in ["0px", "1.5px", "22px", "px"] {
            let spacers = json!({ "S": { "default": good } });
            assert!(ConfigValidator::validate_spacers(Some(&spacers)).is_ok());
        }
    }

    #[test]
    fn test_non_string_spacer_value() {
        let spacers = json!({ "L": { "default": 22 } });
        let err = ConfigValidator::validate_spacers(Some(&spacers)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonStringSpacerValue {
                spacer: "L".into(),
                breakpoint: "default".into()
            }
        );
    }

    #[test]
    fn test_spacer_must_be_map() {
        let spacers = json!({ "L": "22px" });
        let err = ConfigValidator::validate_spacers(Some(&spacers)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSpacer("L".into()));
    }

    #[test]
    fn test_breakpoints_keep_config_order() {
        let spacers = json!({ "S": { "768px": "8px", "default": "4px", "1200px": "12px" } });
        let scale = ConfigValidator::validate_spacers(Some(&spacers)).unwrap();
        let keys: Vec<_> = scale
            .get("S")
            .unwrap()
            .breakpoints
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(keys, vec!["768px", "default", "1200px"]);
    }

    #[test]
    fn test_file_types() {
        let mut raw = valid_raw();
        raw.file_types = Some(json!(["css", "pdf"]));
        assert!(matches!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::InvalidFileType { ref file_type, .. }) if file_type == "pdf"
        ));

        raw.file_types = Some(json!([true]));
        assert!(matches!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::InvalidFileType { ref file_type, .. }) if file_type == "true"
        ));

        raw.file_types = None;
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingFileTypes)
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        let raw = RawConfig::default();
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingProperties)
        );

        let mut raw = valid_raw();
        raw.options = None;
        raw.file_types = None;
        assert_eq!(
            ConfigValidator::validate(&raw),
            Err(ValidationError::MissingOptions)
        );
    }

    #[test]
    fn test_duplicates_collapse_and_filename_defaults() {
        let mut raw = valid_raw();
        raw.file_types = Some(json!(["css", "css", "json"]));
        raw.filename = None;
        let config = ConfigValidator::validate(&raw).unwrap();
        assert_eq!(config.file_types, vec![FileType::Css, FileType::Json]);
        assert_eq!(config.filename, DEFAULT_FILENAME);
    }
}
