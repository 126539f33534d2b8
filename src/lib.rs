//! # kwgen
//!
//! Extracts the keyword literals of a grammar definition and writes them out
//! as a generated source list.
//!
//! ```text
//! grammar.js:  seq(kw("select"), $.columns, kw("from"), $.table)
//! sql.ts:      export const KEYWORDS = [
//!                'select',
//!                'from',
//!              ]
//! ```
//!
//! - [`extraction`] finds `kw("...")` calls
//! - [`rendering`] turns the keywords into the output text
//! - [`generate`] reads, extracts, renders and writes in one go
//! - [`config`] layers defaults, `kwgen.toml` and CLI overrides

pub mod config;
pub mod extraction;
pub mod generate;
pub mod rendering;

pub use config::{GeneratorConfig, Loader};
pub use extraction::{extract_keywords, Extractor};
pub use generate::{generate, GenerateError, Generated};
