// Unit tests for model collaborator selection.

use crate::models::{ClassificationModel, Model, ObjectDetectionModel};
use crate::version::TaskType;

use common::ApiKey;

fn select(task: &TaskType) -> Option<Model> {
    Model::for_task(task, &ApiKey::new("k"), "acme/widgets", "widgets", "3", true)
}

#[test]
fn given_known_tasks_then_matching_collaborator_constructed() {
    assert!(matches!(
        select(&TaskType::ObjectDetection),
        Some(Model::ObjectDetection(_))
    ));
    assert!(matches!(
        select(&TaskType::Classification),
        Some(Model::Classification(_))
    ));
}

#[test]
fn given_unknown_task_then_no_collaborator() {
    assert!(select(&TaskType::Other("semantic-segmentation".to_string())).is_none());
}

#[test]
fn given_local_flag_then_passed_through() {
    let model = ObjectDetectionModel::new(ApiKey::new("k"), "acme/widgets", "widgets", "3", true);
    assert!(model.is_local());

    let model = ClassificationModel::new(ApiKey::new("k"), "acme/widgets", "widgets", "3", false);
    assert!(!model.is_local());
    assert_eq!(model.api_key().expose(), "k");
}
