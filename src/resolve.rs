//! Cardinality resolution: expanding a compiled tree into materialized copies.
//!
//! Each repeatable node's copy count comes from a dotted-path override when
//! one names it, otherwise from its declared cardinality. The same count
//! applies uniformly to every repetition of the parent; a child's override is
//! keyed by the child's own path, independent of which parent copy it sits
//! under. The compiled template is consumed read-only and the result is a
//! fresh tree.

use crate::header::{Cardinality, HeaderSpec};
use crate::template::Section;
use std::collections::HashMap;

/// Copies materialized for an `[*]` node when no override names its path.
pub const UNBOUNDED_DEFAULT: usize = 2;

/// Dotted-path overrides mapping repeatable nodes to a copy count.
///
/// A path is the chain of ancestor names from the section's top-level node
/// down to the target, joined by `.` (for example `"Characters.Character"`).
/// A path may also be qualified with the section name in front, which matters
/// when the target is itself a top-level node (`"Tasks.Task"` for the `Task`
/// node of the `Tasks` section). Overrides on `Fixed` nodes are ignored.
pub type QuantityOverrides = HashMap<String, usize>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One materialized copy of a template node, carrying its resolved children.
pub struct ResolvedNode {
    /// Display name, as declared.
    pub name: String,
    /// Declared heading level, preserved for worksheet output.
    pub level: usize,
    /// Materialized children in source order.
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    #[must_use]
    /// Whether this node is a fillable field rather than a container.
    pub fn is_field(&self) -> bool {
        self.children.is_empty()
    }
}

#[must_use]
/// Expand a section's headings into materialized sibling copies.
///
/// `Fixed(0)` nodes and zero-valued overrides emit nothing, including their
/// subtrees.
pub fn resolve_section(
    section: &Section,
    overrides: &QuantityOverrides,
    unbounded_default: usize,
) -> Vec<ResolvedNode> {
    let mut resolved = Vec::new();
    let mut path = Vec::new();
    for node in &section.nodes {
        expand(
            node,
            &section.name,
            &mut path,
            overrides,
            unbounded_default,
            &mut resolved,
        );
    }
    resolved
}

/// Materialize one node's copies, recursing into children per copy.
fn expand<'t>(
    spec: &'t HeaderSpec,
    section_name: &str,
    path: &mut Vec<&'t str>,
    overrides: &QuantityOverrides,
    unbounded_default: usize,
    out: &mut Vec<ResolvedNode>,
) {
    path.push(&spec.name);
    let count = copy_count(spec, section_name, &path.join("."), overrides, unbounded_default);
    for _ in 0..count {
        let mut children = Vec::new();
        for child in &spec.children {
            expand(
                child,
                section_name,
                path,
                overrides,
                unbounded_default,
                &mut children,
            );
        }
        out.push(ResolvedNode {
            name: spec.name.clone(),
            level: spec.level,
            children,
        });
    }
    path.pop();
}

/// Copy count for a node at the given dotted path.
///
/// An override is looked up by the bare node path first, then by the
/// section-qualified path.
fn copy_count(
    spec: &HeaderSpec,
    section_name: &str,
    path_key: &str,
    overrides: &QuantityOverrides,
    unbounded_default: usize,
) -> usize {
    let requested = || {
        overrides
            .get(path_key)
            .or_else(|| overrides.get(&format!("{section_name}.{path_key}")))
            .copied()
    };
    match spec.cardinality {
        Cardinality::Fixed(count) => count,
        Cardinality::Range { min, max } => requested().map_or(min, |count| count.clamp(min, max)),
        Cardinality::Unbounded => requested().unwrap_or(unbounded_default),
    }
}

#[cfg(test)]
#[path = "tests/resolve.rs"]
mod tests;
