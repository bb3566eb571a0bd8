//! # spacer_core
//!
//! Spacing utility-class generation from a declarative config.
//!
//! A config names the box-model properties (`margin`, `padding`), the
//! directional options (`-x`, `-y`, `-top`, ...), a spacing scale with
//! per-breakpoint values, and the output formats to produce. Each format gets
//! its own emitter:
//!
//! - `css`: flat class blocks plus one `@media` block per breakpoint
//! - `scss` / `less`: one class block per selector with nested `@media` blocks
//! - `json`: selector objects with media conditions as nested keys
//!
//! ## Example
//!
//! ```rust,no_run
//! use spacer_core::{ClassGenerator, ConfigLoader};
//!
//! # async fn example() -> spacer_core::GeneratorResult<()> {
//! let raw = ConfigLoader::load("spacers.json")?;
//! let generator = ClassGenerator::from_raw(&raw)?;
//!
//! // Writes spacers.css, spacers.json, ... into the current directory
//! let written = generator.run(".").await?;
//! for path in written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod declaration;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod loader;
pub mod models;
pub mod validator;

pub use declaration::{build_declaration, declaration_entries, selector};
pub use emitter::{Emitter, FlatEmitter, NestedEmitter, StructuredEmitter};
pub use error::{GeneratorError, GeneratorResult, ValidationError};
pub use generator::{ClassGenerator, GeneratedFile};
pub use loader::ConfigLoader;
pub use models::*;
pub use validator::ConfigValidator;
