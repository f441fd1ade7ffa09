// Unit tests for the workspace/project identifier parser.

use crate::error::IdentError;
use crate::ident::DatasetId;

#[test]
fn given_well_formed_id_when_parsed_then_segments_split_once() {
    let id = DatasetId::parse("acme/widgets").unwrap();

    assert_eq!(id.workspace(), "acme");
    assert_eq!(id.project(), "widgets");
    assert_eq!(id.to_string(), "acme/widgets");
}

#[test]
fn given_id_without_separator_when_parsed_then_missing_separator_error() {
    let err = DatasetId::parse("widgets").unwrap_err();

    assert!(matches!(err, IdentError::MissingSeparator { .. }));
}

/// **VALUE**: Verifies that identifiers with more than one `/` are
/// rejected instead of silently splitting.
///
/// **WHY THIS MATTERS**: Splitting `a/b/c` on the first separator
/// would quietly address the wrong workspace. A typed parser must
/// refuse the ambiguous form outright.
#[test]
fn given_id_with_extra_separator_when_parsed_then_extra_separator_error() {
    let err = DatasetId::parse("acme/widgets/3").unwrap_err();

    assert!(matches!(err, IdentError::ExtraSeparator { .. }));
}

#[test]
fn given_id_with_empty_segment_when_parsed_then_empty_segment_error() {
    assert!(matches!(
        DatasetId::parse("/widgets").unwrap_err(),
        IdentError::EmptySegment { .. }
    ));
    assert!(matches!(
        DatasetId::parse("acme/").unwrap_err(),
        IdentError::EmptySegment { .. }
    ));
    assert!(matches!(
        DatasetId::parse("").unwrap_err(),
        IdentError::MissingSeparator { .. }
    ));
}

#[test]
fn given_parse_failure_when_formatted_then_includes_value_and_location() {
    let err = DatasetId::parse("a/b/c").unwrap_err();
    let message = format!("{err}");

    assert!(message.contains("a/b/c"));
    assert!(message.contains("ident.rs"));
}
