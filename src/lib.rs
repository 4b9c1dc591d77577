//! llmd: markdown worksheet templating for LLM writing workflows.
//!
//! A template declares sections (dash-prefixed lines) and fields (markdown
//! headings annotated with a cardinality token, a `$` required marker, and
//! notes after a pipe). Compiling a template yields an explicit section
//! tree; resolving cardinalities materializes repeated copies; generation
//! renders a fillable worksheet; extraction recovers structured answers from
//! a completed worksheet without needing the original template.
//!
//! Everything in the core is a pure function over in-memory text: no global
//! state, no I/O outside [`input`], safe to call concurrently from any
//! number of threads.

pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod header;
pub mod input;
pub mod resolve;
pub mod template;

pub use error::Error;
pub use extract::{
    extract_all, extract_fields, extract_section, extract_sections, ExtractedSection, FieldNode,
    FieldValue,
};
pub use generate::{generate, generate_with, GenerateOptions};
pub use header::{Cardinality, HeaderSpec};
pub use resolve::{resolve_section, QuantityOverrides, ResolvedNode, UNBOUNDED_DEFAULT};
pub use template::{Section, Template};
