//! Template compilation: full template text to an ordered section tree.
//!
//! A single pass over the trimmed lines maintains a stack of open headings
//! keyed by level, so markdown nesting becomes an explicit tree without a
//! second scan of the raw text. Depth is relative: a section's first field
//! may sit at any heading level, and a child is recognized purely by a
//! strictly greater level than its parent, so level numbers need not be
//! contiguous.

use crate::error::Error;
use crate::header::{self, HeaderSpec};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Top-level unit of a template, introduced by a dash-prefixed line.
pub struct Section {
    /// Display name from the separator line.
    pub name: String,
    /// Top-level headings belonging to this section, in source order.
    pub nodes: Vec<HeaderSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A compiled template: an ordered sequence of sections.
pub struct Template {
    /// Sections in source order. Names need not be unique.
    pub sections: Vec<Section>,
}

impl Template {
    /// Compile template text into a section tree.
    ///
    /// Blank lines are discarded, and lines that are neither separators nor
    /// headings are skipped as free prose between declarations.
    ///
    /// # Errors
    ///
    /// Propagates header parse failures, and returns
    /// [`Error::NoActiveSection`] if a heading line appears before the first
    /// section separator.
    pub fn compile(text: &str) -> Result<Self, Error> {
        let mut sections: Vec<Section> = Vec::new();
        // (level, index among its siblings) for each open heading
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('-') {
                let name = header::parse_section_name(line)?;
                sections.push(Section {
                    name,
                    nodes: Vec::new(),
                });
                stack.clear();
            } else if line.starts_with('#') {
                let spec = header::parse_heading(line)?;
                let Some(section) = sections.last_mut() else {
                    return Err(Error::NoActiveSection {
                        line: line.to_string(),
                    });
                };
                while stack.last().is_some_and(|&(level, _)| level >= spec.level) {
                    stack.pop();
                }
                let mut siblings = &mut section.nodes;
                for &(_, index) in &stack {
                    siblings = &mut siblings[index].children;
                }
                stack.push((spec.level, siblings.len()));
                siblings.push(spec);
            }
        }

        Ok(Self { sections })
    }

    #[must_use]
    /// Look up a section by name, returning the first match.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }
}

#[cfg(test)]
#[path = "tests/template.rs"]
mod tests;
