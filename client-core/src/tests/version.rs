// Unit tests for version metadata handling.

use crate::config::ClientConfig;
use crate::models::Model;
use crate::version::{TaskType, Version, VersionInfo};

use common::ApiKey;

use serde_json::json;

fn sample_info() -> VersionInfo {
    serde_json::from_value(json!({
        "id": "acme/widgets",
        "created": 1616161616.123,
        "images": 240,
        "augmentation": { "flip": { "horizontal": true } },
        "preprocessing": { "resize": { "width": 640, "height": 640 } },
        "splits": { "train": 200, "valid": 30, "test": 10 }
    }))
    .unwrap()
}

fn sample_version(task_type: &str) -> Version {
    Version::new(
        sample_info(),
        task_type,
        ApiKey::new("test-key"),
        "widgets",
        "acme/widgets/3",
        false,
        ClientConfig::default(),
    )
}

#[test]
fn given_metadata_when_version_built_then_fields_copied_verbatim() {
    let version = sample_version("object-detection");

    assert_eq!(version.id, "acme/widgets");
    assert_eq!(version.created, 1616161616.123);
    assert_eq!(version.images, 240);
    assert_eq!(version.splits.get("train"), Some(&200));
    assert_eq!(version.augmentation["flip"]["horizontal"], json!(true));
    assert_eq!(version.preprocessing["resize"]["width"], json!(640));
}

#[test]
fn given_prefixed_version_identifier_then_number_strips_workspace() {
    let version = sample_version("object-detection");

    assert_eq!(version.version, "acme/widgets/3");
    assert_eq!(version.number(), "3");
}

#[test]
fn given_bare_version_identifier_then_number_is_identity() {
    let version = Version::new(
        sample_info(),
        "classification",
        ApiKey::new("test-key"),
        "widgets",
        "3",
        false,
        ClientConfig::default(),
    );

    assert_eq!(version.number(), "3");
}

/// **VALUE**: Verifies the metadata round trip the summary promises.
///
/// **WHY THIS MATTERS**: Downstream tooling reads the summary as its
/// record of what was downloaded; a silently dropped or renamed field
/// corrupts that record.
#[test]
fn given_version_when_summarized_then_every_field_round_trips() {
    let version = sample_version("object-detection");
    let summary = version.summary();

    assert_eq!(summary["name"], json!("widgets"));
    assert_eq!(summary["type"], json!("object-detection"));
    assert_eq!(summary["version"], json!("acme/widgets/3"));
    assert_eq!(summary["augmentation"], version.augmentation);
    assert_eq!(summary["created"], json!(1616161616.123));
    assert_eq!(summary["preprocessing"], version.preprocessing);
    assert_eq!(summary["splits"], json!({ "train": 200, "valid": 30, "test": 10 }));
}

#[test]
fn given_object_detection_task_then_detection_model_selected() {
    let version = sample_version("object-detection");

    match version.model() {
        Some(Model::ObjectDetection(model)) => {
            assert_eq!(model.dataset_id(), "acme/widgets");
            assert_eq!(model.name(), "widgets");
            assert_eq!(model.version(), "3");
            assert!(!model.is_local());
        }
        other => panic!("expected object-detection model, got {other:?}"),
    }
}

#[test]
fn given_classification_task_then_classification_model_selected() {
    let version = sample_version("classification");

    assert!(matches!(version.model(), Some(Model::Classification(_))));
}

#[test]
fn given_unrecognized_task_then_no_model_and_no_error() {
    let version = sample_version("instance-segmentation");

    assert!(version.model().is_none());
    assert_eq!(version.task_type, TaskType::Other("instance-segmentation".to_string()));
}

#[test]
fn given_task_type_strings_then_known_variants_map() {
    assert_eq!(TaskType::from("object-detection"), TaskType::ObjectDetection);
    assert_eq!(TaskType::from("classification"), TaskType::Classification);
    assert_eq!(TaskType::from("object-detection").as_str(), "object-detection");
    assert_eq!(TaskType::from("keypoint").as_str(), "keypoint");
}

#[test]
fn given_sparse_metadata_when_deserialized_then_optional_fields_default() {
    let info: VersionInfo = serde_json::from_value(json!({
        "id": "acme/widgets",
        "created": 1.0
    }))
    .unwrap();

    assert_eq!(info.images, 0);
    assert!(info.splits.is_empty());
    assert!(info.augmentation.is_null());
}
