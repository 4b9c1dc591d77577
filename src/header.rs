//! Header line parsing for template markup.
//!
//! One structural line of a template is either a section separator (a
//! leading dash) or a field heading (a run of leading `#` characters). A
//! heading carries a display name plus optional trailing annotations: a
//! bracketed cardinality token, a `$` required marker, and free-text notes
//! after a `|` pipe. Parsing a line is a pure function with no side effects.

use crate::error::Error;

/// Declared repetition count for a field node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly this many copies; overrides do not apply.
    Fixed(usize),
    /// Between `min` and `max` copies; overrides clamp to the bounds.
    Range {
        /// Fewest copies to materialize; the count used with no override.
        min: usize,
        /// Most copies an override may request.
        max: usize,
    },
    /// Unlimited copies; a fixed default applies when no override is given.
    Unbounded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One declared node in the template: a field or container heading.
pub struct HeaderSpec {
    /// Display name with annotations stripped.
    pub name: String,
    /// Heading depth, the count of leading `#` characters.
    pub level: usize,
    /// Declared repetition count, `Fixed(1)` when no token was given.
    pub cardinality: Cardinality,
    /// Whether the `$` required marker was present.
    pub required: bool,
    /// Free-text guidance after the pipe, empty when absent.
    pub notes: String,
    /// Headings declared at a deeper level directly below this one, in
    /// source order.
    pub children: Vec<HeaderSpec>,
}

/// Parse a section separator line into its section name.
///
/// Strips one leading dash and surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::MalformedSection`] if nothing follows the dash.
pub fn parse_section_name(line: &str) -> Result<String, Error> {
    let rest = line.trim();
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    let name = rest.trim();
    if name.is_empty() {
        return Err(Error::MalformedSection {
            line: line.trim().to_string(),
        });
    }
    Ok(name.to_string())
}

/// Parse a heading line into a [`HeaderSpec`] with no children attached.
///
/// The remainder after the `#` run splits on the first unescaped pipe into
/// the head and the notes (`\|` does not split and unescapes to a literal
/// pipe in the name). The head's tail is scanned for `[...]` and `$` tokens
/// in either order; whatever remains, trimmed, is the display name.
///
/// # Errors
///
/// Returns [`Error::InvalidCardinality`] if a bracket token fails the
/// `[N]` / `[*]` / `[A-B]` grammar, or [`Error::EmptyFieldName`] if no
/// display name remains once tokens are stripped.
pub fn parse_heading(line: &str) -> Result<HeaderSpec, Error> {
    let trimmed = line.trim();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    let (head, notes) = split_unescaped_pipe(&trimmed[level..]);
    let notes = notes.unwrap_or("").trim().to_string();

    let mut head = head.trim().to_string();
    let required = head.contains('$');
    let mut cardinality = Cardinality::Fixed(1);
    loop {
        let tail = head.trim_end();
        if let Some(stripped) = tail.strip_suffix('$') {
            head = stripped.to_string();
        } else if let Some(stripped) = tail.strip_suffix(']') {
            let Some(open) = stripped.rfind('[') else { break };
            cardinality = parse_cardinality(&stripped[open + 1..])?;
            head = stripped[..open].to_string();
        } else {
            break;
        }
    }

    let name = head.replace("\\|", "|").trim().to_string();
    if name.is_empty() {
        return Err(Error::EmptyFieldName {
            line: trimmed.to_string(),
        });
    }

    Ok(HeaderSpec {
        name,
        level,
        cardinality,
        required,
        notes,
        children: Vec::new(),
    })
}

/// Parse the text between cardinality brackets.
fn parse_cardinality(token: &str) -> Result<Cardinality, Error> {
    let invalid = || Error::InvalidCardinality {
        token: token.trim().to_string(),
    };
    let body = token.trim();
    if body == "*" {
        Ok(Cardinality::Unbounded)
    } else if let Some((min, max)) = body.split_once('-') {
        let min: usize = min.trim().parse().map_err(|_| invalid())?;
        let max: usize = max.trim().parse().map_err(|_| invalid())?;
        if min > max {
            return Err(invalid());
        }
        Ok(Cardinality::Range { min, max })
    } else {
        body.parse().map(Cardinality::Fixed).map_err(|_| invalid())
    }
}

/// Split on the first pipe not preceded by a backslash.
fn split_unescaped_pipe(text: &str) -> (&str, Option<&str>) {
    let mut escaped = false;
    for (index, c) in text.char_indices() {
        if c == '|' && !escaped {
            return (&text[..index], Some(&text[index + 1..]));
        }
        escaped = c == '\\' && !escaped;
    }
    (text, None)
}

#[cfg(test)]
#[path = "tests/header.rs"]
mod tests;
