//! Plain stylesheet output.

use super::{lookup, text_media_query};
use crate::declaration::{build_declaration, selector};
use crate::error::GeneratorResult;
use crate::models::{Breakpoint, CssProperty, SpacingOption, SpacingScale};

/// Emits one class block per option, and one `@media` block per non-default
/// breakpoint containing a class block for every option.
#[derive(Debug)]
pub struct FlatEmitter<'a> {
    spacers: &'a SpacingScale,
    options: &'a [SpacingOption],
    css: String,
}

impl<'a> FlatEmitter<'a> {
    pub fn new(spacers: &'a SpacingScale, options: &'a [SpacingOption]) -> Self {
        Self {
            spacers,
            options,
            css: String::new(),
        }
    }

    pub fn create_classes(&mut self, scale_key: &str, property: CssProperty) -> GeneratorResult<()> {
        let spacer = lookup(self.spacers, scale_key)?;

        for (breakpoint, value) in spacer.values() {
            match breakpoint {
                Breakpoint::Default => self.push_default(scale_key, property, value),
                Breakpoint::MinWidth(width) => {
                    self.push_media(scale_key, property, width, value)
                }
            }
        }

        Ok(())
    }

    pub fn output(&self) -> &str {
        &self.css
    }

    fn push_default(&mut self, scale_key: &str, property: CssProperty, value: &str) {
        for &option in self.options {
            self.css.push_str(&format!(
                "\n{} {{\n\t{}\n}}\n",
                selector(property, option, scale_key),
                build_declaration(property, option, value)
            ));
        }
    }

    fn push_media(&mut self, scale_key: &str, property: CssProperty, width: &str, value: &str) {
        self.css.push_str(&format!("\n{} {{\n", text_media_query(width)));

        for &option in self.options {
            self.css.push_str(&format!(
                "\n\t{} {{\n\t\t{}\n\t}}\n\t",
                selector(property, option, scale_key),
                build_declaration(property, option, value)
            ));
        }

        self.css.push_str("\n}\n");
    }
}
