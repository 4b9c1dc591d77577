use super::{generate, generate_with, GenerateOptions};
use crate::error::Error;
use crate::resolve::QuantityOverrides;

const TASKS_TEMPLATE: &str =
    "- Tasks\n## Task [*] | Task items\n### Description [1] $ | desc\n### Priority [1] | pri";

fn line_count(worksheet: &str, wanted: &str) -> usize {
    worksheet.lines().filter(|line| *line == wanted).count()
}

#[test]
fn test_tasks_template_materializes_two_blocks_by_default() {
    let worksheet = generate(TASKS_TEMPLATE, None, &QuantityOverrides::new()).unwrap();

    assert_eq!(line_count(&worksheet, "## Task"), 2);
    assert_eq!(line_count(&worksheet, "### Description | "), 2);
    assert_eq!(line_count(&worksheet, "### Priority | "), 2);
}

#[test]
fn test_tasks_template_exact_output() {
    let worksheet = generate(TASKS_TEMPLATE, None, &QuantityOverrides::new()).unwrap();

    let expected = "# Tasks\n---\n\
                    ## Task\n### Description | \n\n### Priority | \n\n\
                    ## Task\n### Description | \n\n### Priority | \n";
    assert_eq!(worksheet, expected);
}

#[test]
fn test_tasks_override_materializes_three_blocks() {
    let overrides = QuantityOverrides::from([("Tasks.Task".to_string(), 3)]);
    let worksheet = generate(TASKS_TEMPLATE, None, &overrides).unwrap();

    assert_eq!(line_count(&worksheet, "## Task"), 3);
    assert_eq!(line_count(&worksheet, "### Description | "), 3);
}

#[test]
fn test_generation_is_deterministic() {
    let overrides = QuantityOverrides::from([("Tasks.Task".to_string(), 4)]);

    let first = generate(TASKS_TEMPLATE, None, &overrides).unwrap();
    let second = generate(TASKS_TEMPLATE, None, &overrides).unwrap();
    assert_eq!(first, second, "identical arguments give byte-identical output");
}

#[test]
fn test_notes_never_reach_the_worksheet() {
    let worksheet = generate(TASKS_TEMPLATE, None, &QuantityOverrides::new()).unwrap();

    assert!(!worksheet.contains("Task items"));
    assert!(!worksheet.contains("desc"));
}

#[test]
fn test_section_filter_selects_one_section() {
    let text = "- A\n# X [1] | x\n- B\n# Y [1] | y";

    let worksheet = generate(text, Some("B"), &QuantityOverrides::new()).unwrap();
    assert!(worksheet.starts_with("# B\n---\n"));
    assert!(!worksheet.contains("# A"));
}

#[test]
fn test_section_filter_miss_fails() {
    let err = generate(TASKS_TEMPLATE, Some("Nonexistent"), &QuantityOverrides::new()).unwrap_err();
    assert_eq!(
        err,
        Error::SectionNotFound {
            name: "Nonexistent".to_string()
        }
    );
}

#[test]
fn test_invalid_cardinality_fails_with_no_output() {
    let err = generate("- S\n## A [5-2] | bad", None, &QuantityOverrides::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidCardinality { .. }));
}

#[test]
fn test_sections_are_separated_by_a_blank_line() {
    let text = "- A\n# X [1] | x\n- B\n# Y [1] | y";
    let worksheet = generate(text, None, &QuantityOverrides::new()).unwrap();

    assert_eq!(worksheet, "# A\n---\n# X | \n\n# B\n---\n# Y | \n");
}

#[test]
fn test_book_template_with_quantities() {
    let text = "\
- Characters
# Characters [1] | Character section container
## Character [*] | Create compelling characters
### Name [1] $ | Character name
- Structure
# Outline [1] | Chapter outline container
## Chapter [*] | Detailed chapter information
### Title [1] $ | Engaging chapter title
### Key Scenes [2-4] | Important scenes
";
    let overrides = QuantityOverrides::from([
        ("Characters.Character".to_string(), 3),
        ("Outline.Chapter".to_string(), 5),
        ("Outline.Chapter.Key Scenes".to_string(), 3),
    ]);

    let worksheet = generate(text, None, &overrides).unwrap();
    assert_eq!(line_count(&worksheet, "## Character"), 3);
    assert_eq!(line_count(&worksheet, "### Name | "), 3);
    assert_eq!(line_count(&worksheet, "## Chapter"), 5);
    assert_eq!(line_count(&worksheet, "### Title | "), 5);
    assert_eq!(line_count(&worksheet, "### Key Scenes | "), 15);
}

#[test]
fn test_rule_width_option_widens_the_rule() {
    let options = GenerateOptions {
        rule_width: 5,
        ..GenerateOptions::default()
    };
    let worksheet =
        generate_with(TASKS_TEMPLATE, None, &QuantityOverrides::new(), options).unwrap();

    assert!(worksheet.starts_with("# Tasks\n-----\n"));
}

#[test]
fn test_empty_template_generates_empty_output() {
    let worksheet = generate("", None, &QuantityOverrides::new()).unwrap();
    assert_eq!(worksheet, "");
}
