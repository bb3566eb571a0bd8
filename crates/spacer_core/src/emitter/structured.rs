//! JSON output.

use serde_json::{Map, Value};

use super::lookup;
use crate::declaration::{declaration_entries, selector};
use crate::error::GeneratorResult;
use crate::models::{Breakpoint, CssProperty, SpacingOption, SpacingScale};

/// Builds a selector-keyed object. Default declarations sit at the top level
/// of each selector, breakpoint declarations under an `@media` key.
///
/// Writes to a selector that already exists merge into it; a key written
/// twice keeps its position and takes the latest value.
#[derive(Debug)]
pub struct StructuredEmitter<'a> {
    spacers: &'a SpacingScale,
    options: &'a [SpacingOption],
    classes: Map<String, Value>,
}

impl<'a> StructuredEmitter<'a> {
    pub fn new(spacers: &'a SpacingScale, options: &'a [SpacingOption]) -> Self {
        Self {
            spacers,
            options,
            classes: Map::new(),
        }
    }

    pub fn create_classes(&mut self, scale_key: &str, property: CssProperty) -> GeneratorResult<()> {
        let spacer = lookup(self.spacers, scale_key)?;

        for (breakpoint, value) in spacer.values() {
            for &option in self.options {
                let declarations: Map<String, Value> =
                    declaration_entries(property, option, value)
                        .into_iter()
                        .map(|(name, value)| (name, Value::String(value)))
                        .collect();

                let definition = match breakpoint {
                    Breakpoint::Default => declarations,
                    Breakpoint::MinWidth(width) => {
                        let mut media = Map::new();
                        media.insert(media_query(width), Value::Object(declarations));
                        media
                    }
                };

                self.merge(selector(property, option, scale_key), definition);
            }
        }

        Ok(())
    }

    /// The accumulated selector map.
    pub fn classes(&self) -> &Map<String, Value> {
        &self.classes
    }

    pub fn render(&self) -> GeneratorResult<String> {
        Ok(serde_json::to_string(&self.classes)?)
    }

    fn merge(&mut self, class_name: String, definition: Map<String, Value>) {
        let record = self
            .classes
            .entry(class_name)
            .or_insert_with(|| Value::Object(Map::new()));

        if let Value::Object(record) = record {
            record.extend(definition);
        }
    }
}

fn media_query(width: &str) -> String {
    format!("@media (min-width: {width})")
}
