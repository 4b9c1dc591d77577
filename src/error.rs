//! Error types for template compilation, worksheet generation, and extraction.
//!
//! Every variant indicates malformed input or a missing name, never a
//! transient condition. Failures are all-or-nothing: callers get no partial
//! worksheet or partial field map alongside an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure surfaced by template compilation, generation, or extraction.
pub enum Error {
    /// A section separator line had nothing after the dash.
    #[error("section separator has no name: '{line}'")]
    MalformedSection {
        /// The offending template line.
        line: String,
    },
    /// A bracketed token did not match the `[N]` / `[*]` / `[A-B]` grammar.
    #[error("invalid cardinality token '[{token}]'")]
    InvalidCardinality {
        /// Text between the brackets.
        token: String,
    },
    /// A heading line had no display name once its tokens were stripped.
    #[error("heading has no field name: '{line}'")]
    EmptyFieldName {
        /// The offending template line.
        line: String,
    },
    /// A heading line appeared before the first section separator.
    #[error("heading before any section separator: '{line}'")]
    NoActiveSection {
        /// The offending template line.
        line: String,
    },
    /// A requested section name matched nothing.
    #[error("section '{name}' not found")]
    SectionNotFound {
        /// The name that was requested.
        name: String,
    },
}
