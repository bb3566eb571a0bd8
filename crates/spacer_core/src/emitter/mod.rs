//! Output format emitters.
//!
//! Every emitter consumes the same spacers and options but groups breakpoints
//! differently:
//!
//! - [`FlatEmitter`] (`css`): one block per selector, one `@media` block per
//!   breakpoint wrapping every option.
//! - [`NestedEmitter`] (`scss`, `less`): one block per selector with the
//!   `@media` blocks nested inside it.
//! - [`StructuredEmitter`] (`json`): selector objects with media conditions
//!   as nested keys.
//!
//! Each emitter owns its accumulator, so a fresh emitter is built for every
//! output format of every run.

mod flat;
mod nested;
mod structured;

pub use flat::FlatEmitter;
pub use nested::NestedEmitter;
pub use structured::StructuredEmitter;

use crate::error::{GeneratorError, GeneratorResult};
use crate::models::{CssProperty, FileType, Spacer, SpacingOption, SpacingScale};

/// Emitter selected for an output format.
#[derive(Debug)]
pub enum Emitter<'a> {
    Flat(FlatEmitter<'a>),
    Nested(NestedEmitter<'a>),
    Structured(StructuredEmitter<'a>),
}

impl<'a> Emitter<'a> {
    /// Build a fresh emitter for the given file type.
    pub fn for_file_type(
        file_type: FileType,
        spacers: &'a SpacingScale,
        options: &'a [SpacingOption],
    ) -> Self {
        match file_type {
            FileType::Css => Self::Flat(FlatEmitter::new(spacers, options)),
            FileType::Scss | FileType::Less => Self::Nested(NestedEmitter::new(spacers, options)),
            FileType::Json => Self::Structured(StructuredEmitter::new(spacers, options)),
        }
    }

    /// Append the classes for one scale key and property.
    pub fn create_classes(&mut self, scale_key: &str, property: CssProperty) -> GeneratorResult<()> {
        match self {
            Self::Flat(e) => e.create_classes(scale_key, property),
            Self::Nested(e) => e.create_classes(scale_key, property),
            Self::Structured(e) => e.create_classes(scale_key, property),
        }
    }

    /// Serialize everything accumulated so far.
    pub fn render(&self) -> GeneratorResult<String> {
        match self {
            Self::Flat(e) => Ok(e.output().to_string()),
            Self::Nested(e) => Ok(e.output().to_string()),
            Self::Structured(e) => e.render(),
        }
    }
}

fn lookup<'a>(spacers: &'a SpacingScale, scale_key: &str) -> GeneratorResult<&'a Spacer> {
    spacers
        .get(scale_key)
        .ok_or_else(|| GeneratorError::UnknownSpacer(scale_key.to_string()))
}

/// Media block opener used by the text formats.
fn text_media_query(width: &str) -> String {
    format!("@media(min-width: {width})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> SpacingScale {
        [Spacer::new("S", "4px").with_breakpoint("768px", "8px")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_file_type_dispatch() {
        let spacers = scale();
        let options = [SpacingOption::Top];

        assert!(matches!(
            Emitter::for_file_type(FileType::Css, &spacers, &options),
            Emitter::Flat(_)
        ));
        assert!(matches!(
            Emitter::for_file_type(FileType::Scss, &spacers, &options),
            Emitter::Nested(_)
        ));
        assert!(matches!(
            Emitter::for_file_type(FileType::Less, &spacers, &options),
            Emitter::Nested(_)
        ));
        assert!(matches!(
            Emitter::for_file_type(FileType::Json, &spacers, &options),
            Emitter::Structured(_)
        ));
    }

    #[test]
    fn test_unknown_spacer() {
        let spacers = scale();
        let options = [SpacingOption::Top];

        for file_type in [FileType::Css, FileType::Scss, FileType::Json] {
            let mut emitter = Emitter::for_file_type(file_type, &spacers, &options);
            let err = emitter.create_classes("XXL", CssProperty::Margin).unwrap_err();
            assert!(matches!(err, GeneratorError::UnknownSpacer(ref key) if key == "XXL"));
        }
    }

    #[test]
    fn test_fresh_emitter_is_empty() {
        let spacers = scale();
        let options = [SpacingOption::Top];

        let css = Emitter::for_file_type(FileType::Css, &spacers, &options);
        assert_eq!(css.render().unwrap(), "");

        let json = Emitter::for_file_type(FileType::Json, &spacers, &options);
        assert_eq!(json.render().unwrap(), "{}");
    }
}
