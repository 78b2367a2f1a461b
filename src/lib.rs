//! # mockstruct - type-directed mock data
//!
//! mockstruct synthesizes plausible sample records from a schema: an ordered map of
//! field name to type expression, usually extracted from a TypeScript `interface`.
//! Every field gets a value whose shape matches its declared type and, where the
//! field name gives a hint, whose content looks right for it: an `email` field gets
//! an address, `age` a small integer, `createdAt` a recent timestamp.
//!
//! ## Quick Start
//!
//! ```rust
//! use mockstruct::adapters::synthesizer::{synthesize, SynthesisOptions};
//! use mockstruct::domain::Schema;
//!
//! let schema = Schema::new()
//!     .with_field("id", "string")
//!     .with_field("age", "number")
//!     .with_field("isActive", "boolean");
//!
//! let options = SynthesisOptions::new().with_seed(42);
//! let user = synthesize(&schema, &options)?;
//! assert_eq!(user, synthesize(&schema, &options)?);
//! # Ok::<(), mockstruct::domain::SynthError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema, type-expression shapes, errors, the `SchemaSource` port
//! - **Adapters**: name heuristics, value producers, the synthesizer, the
//!   TypeScript extractor and output rendering
//! - **Config**: layered settings for the command-line tool

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;

pub use adapters::synthesizer::{synthesize, synthesize_many, SynthesisOptions};
pub use domain::{MockObject, Schema, SynthError};
