//! Nested stylesheet output for SCSS and LESS.

use super::{lookup, text_media_query};
use crate::declaration::{build_declaration, selector};
use crate::error::GeneratorResult;
use crate::models::{Breakpoint, CssProperty, SpacingOption, SpacingScale};

/// Emits one class block per option with its breakpoint overrides nested
/// inside as `@media` blocks.
#[derive(Debug)]
pub struct NestedEmitter<'a> {
    spacers: &'a SpacingScale,
    options: &'a [SpacingOption],
    css: String,
}

impl<'a> NestedEmitter<'a> {
    pub fn new(spacers: &'a SpacingScale, options: &'a [SpacingOption]) -> Self {
        Self {
            spacers,
            options,
            css: String::new(),
        }
    }

    pub fn create_classes(&mut self, scale_key: &str, property: CssProperty) -> GeneratorResult<()> {
        let spacer = lookup(self.spacers, scale_key)?;

        for &option in self.options {
            for (breakpoint, value) in spacer.values() {
                let declaration = build_declaration(property, option, value);
                match breakpoint {
                    Breakpoint::Default => self.css.push_str(&format!(
                        "\n{} {{\n\t{}\n",
                        selector(property, option, scale_key),
                        declaration
                    )),
                    Breakpoint::MinWidth(width) => self.css.push_str(&format!(
                        "\n\t{} {{\n\t\t{}\n\t}}\n",
                        text_media_query(width),
                        declaration
                    )),
                }
            }

            self.css.push_str("}\n");
        }

        Ok(())
    }

    pub fn output(&self) -> &str {
        &self.css
    }
}
