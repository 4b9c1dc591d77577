use super::{parse_heading, parse_section_name, Cardinality};
use crate::error::Error;

#[test]
fn test_full_heading() {
    let spec = parse_heading("### Title [1] $ | Generate an engaging title").unwrap();

    assert_eq!(spec.level, 3);
    assert_eq!(spec.name, "Title");
    assert_eq!(spec.cardinality, Cardinality::Fixed(1));
    assert!(spec.required);
    assert_eq!(spec.notes, "Generate an engaging title");
    assert!(spec.children.is_empty());
}

#[test]
fn test_defaults_without_tokens() {
    let spec = parse_heading("## Premise").unwrap();

    assert_eq!(spec.level, 2);
    assert_eq!(spec.name, "Premise");
    assert_eq!(spec.cardinality, Cardinality::Fixed(1), "absent token is [1]");
    assert!(!spec.required);
    assert_eq!(spec.notes, "");
}

#[test]
fn test_unbounded_and_range_tokens() {
    let character = parse_heading("## Character [*] | Create compelling characters").unwrap();
    assert_eq!(character.cardinality, Cardinality::Unbounded);

    let scenes = parse_heading("### Key Scenes [2-4] | Important scenes").unwrap();
    assert_eq!(scenes.cardinality, Cardinality::Range { min: 2, max: 4 });
    assert_eq!(scenes.name, "Key Scenes");
}

#[test]
fn test_token_order_is_irrelevant() {
    let dollar_last = parse_heading("### Name [3] $ | x").unwrap();
    let dollar_first = parse_heading("### Name $ [3] | x").unwrap();

    assert_eq!(dollar_last.name, "Name");
    assert_eq!(dollar_first.name, "Name");
    assert_eq!(dollar_last.cardinality, Cardinality::Fixed(3));
    assert_eq!(dollar_first.cardinality, Cardinality::Fixed(3));
    assert!(dollar_last.required);
    assert!(dollar_first.required);
}

#[test]
fn test_notes_keep_later_pipes() {
    let spec = parse_heading("## Title | use | sparingly").unwrap();

    assert_eq!(spec.name, "Title");
    assert_eq!(spec.notes, "use | sparingly", "only the first pipe splits");
}

#[test]
fn test_escaped_pipe_stays_in_name() {
    let spec = parse_heading(r"## Either\|Or | pick one").unwrap();

    assert_eq!(spec.name, "Either|Or");
    assert_eq!(spec.notes, "pick one");
}

#[test]
fn test_invalid_cardinality_tokens() {
    for line in ["## A [5-2]", "## A [x]", "## A [3-]", "## A [-3]"] {
        let err = parse_heading(line).unwrap_err();
        assert!(
            matches!(err, Error::InvalidCardinality { .. }),
            "'{line}' should fail the cardinality grammar, got {err:?}"
        );
    }
    assert_eq!(
        parse_heading("## A [5-2]").unwrap_err(),
        Error::InvalidCardinality {
            token: "5-2".to_string()
        }
    );
}

#[test]
fn test_empty_field_name() {
    let err = parse_heading("## [2] $").unwrap_err();
    assert!(matches!(err, Error::EmptyFieldName { .. }));
}

#[test]
fn test_section_separator() {
    assert_eq!(
        parse_section_name("- Basic Information").unwrap(),
        "Basic Information"
    );
    assert_eq!(parse_section_name("-Characters").unwrap(), "Characters");

    for line in ["-", "-   "] {
        let err = parse_section_name(line).unwrap_err();
        assert!(matches!(err, Error::MalformedSection { .. }));
    }
}
