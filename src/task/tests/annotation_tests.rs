//! Tests for annotation lookup, addition and deletion on a task.

use super::select_config;
use crate::annotation::domain::{Annotation, AnnotationId, ImageInfo, NewComment, NewDescription};
use crate::task::domain::{Task, TaskError};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn image_info() -> ImageInfo {
    ImageInfo::new("https://iiif.example.org/image/abc", 640, 480).expect("valid image info")
}

fn comment(image_info: &ImageInfo, value: &str) -> Annotation {
    Annotation::comment(NewComment::new(image_info.clone(), value), &DefaultClock)
}

fn task_with(annotations: Vec<Annotation>) -> Task {
    Task::new(select_config().with_annotations(annotations)).expect("valid task")
}

#[rstest]
fn get_annotation_returns_matching_entry(image_info: ImageInfo) {
    let first = comment(&image_info, "first");
    let second = comment(&image_info, "second");
    let task = task_with(vec![first.clone(), second.clone()]);

    assert_eq!(task.get_annotation(second.id()), Some(&second));
    assert_eq!(task.get_annotation(first.id()), Some(&first));
}

#[rstest]
fn get_annotation_returns_none_when_missing(image_info: ImageInfo) {
    let empty = task_with(Vec::new());
    let populated = task_with(vec![comment(&image_info, "only")]);

    assert!(empty.get_annotation(AnnotationId::new()).is_none());
    assert!(populated.get_annotation(AnnotationId::new()).is_none());
}

#[rstest]
fn delete_annotation_removes_entry_and_keeps_order(image_info: ImageInfo) {
    let first = comment(&image_info, "first");
    let second = comment(&image_info, "second");
    let third = comment(&image_info, "third");
    let mut task = task_with(vec![first.clone(), second.clone(), third.clone()]);

    let removed = task
        .delete_annotation(second.id())
        .expect("annotation should be deleted");

    assert_eq!(removed, second);
    assert_eq!(task.annotations().as_slice(), &[first, third]);
    assert!(task.get_annotation(second.id()).is_none());
}

#[rstest]
fn delete_annotation_on_empty_task_fails() {
    let mut task = task_with(Vec::new());
    let missing = AnnotationId::new();

    assert_eq!(
        task.delete_annotation(missing),
        Err(TaskError::AnnotationNotFound(missing))
    );
}

#[rstest]
fn delete_annotation_with_unknown_id_leaves_collection_untouched(image_info: ImageInfo) {
    let existing = comment(&image_info, "keep");
    let mut task = task_with(vec![existing.clone()]);
    let missing = AnnotationId::new();

    let result = task.delete_annotation(missing);

    assert_eq!(result, Err(TaskError::AnnotationNotFound(missing)));
    assert_eq!(task.annotations().as_slice(), &[existing]);
}

#[rstest]
fn delete_annotation_twice_fails_the_second_time(image_info: ImageInfo) {
    let only = comment(&image_info, "once");
    let mut task = task_with(vec![only.clone()]);

    task.delete_annotation(only.id()).expect("first delete");

    assert_eq!(
        task.delete_annotation(only.id()),
        Err(TaskError::AnnotationNotFound(only.id()))
    );
}

#[rstest]
fn add_annotation_appends_and_rejects_duplicates(image_info: ImageInfo) {
    let mut task = task_with(Vec::new());
    let description = Annotation::description(
        NewDescription::new(image_info.clone(), "a door").with_tag("building", None),
        &DefaultClock,
    );
    let later = comment(&image_info, "later");

    task.add_annotation(description.clone()).expect("first add");
    task.add_annotation(later.clone()).expect("second add");
    let duplicate = task.add_annotation(description.clone());

    assert_eq!(
        duplicate,
        Err(TaskError::DuplicateAnnotation(description.id()))
    );
    assert_eq!(task.annotations().len(), 2);
    let ids: Vec<AnnotationId> = task.annotations().iter().map(Annotation::id).collect();
    assert_eq!(ids, vec![description.id(), later.id()]);
}

#[rstest]
fn annotations_can_be_amended_in_place(image_info: ImageInfo) {
    let description = Annotation::description(
        NewDescription::new(image_info, "a door"),
        &DefaultClock,
    );
    let id = description.id();
    let mut task = task_with(vec![description]);

    task.get_annotation_mut(id)
        .expect("annotation present")
        .add_classification("entrance")
        .expect("descriptions accept classifications");

    assert_eq!(
        task.get_annotation(id)
            .and_then(Annotation::classification),
        Some("entrance")
    );
}
