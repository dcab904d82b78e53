//! Tests for Web Annotation record rendering.

use crate::annotation::domain::{
    Agent, Annotation, Fragment, ImageInfo, NewComment, NewDescription, Region,
    WEB_ANNOTATION_CONTEXT,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn image_info() -> ImageInfo {
    ImageInfo::new("https://iiif.example.org/image/tower", 1000, 800).expect("valid image info")
}

#[rstest]
fn description_record_matches_web_annotation_shape(image_info: ImageInfo) {
    let request = NewDescription::new(image_info, "a red tower").with_tag(
        "architecture",
        Some(Fragment::parse("xywh=10,10,50,50").expect("valid fragment")),
    );
    let annotation = Annotation::description(request, &DefaultClock);

    let json = annotation.to_record().to_json().expect("record serialises");

    assert_eq!(json["@context"], WEB_ANNOTATION_CONTEXT);
    assert_eq!(json["id"], annotation.id().to_iri());
    assert_eq!(json["type"], "Annotation");
    assert_eq!(json["motivation"], "describing");
    assert_eq!(
        json["body"],
        json!([{
            "type": "TextualBody",
            "value": "a red tower",
            "purpose": "describing",
            "format": "text/plain"
        }])
    );
    assert_eq!(
        json["tags"],
        json!([{ "tag": "architecture", "fragmentURI": "xywh=10,10,50,50" }])
    );
    assert_eq!(
        json["target"],
        json!({ "source": "https://iiif.example.org/image/tower" })
    );
    assert!(json.get("classification").is_none());
    assert!(json.get("creator").is_none());
    assert!(json.get("generator").is_none());
}

#[rstest]
fn comment_record_includes_selector_and_attribution(image_info: ImageInfo) {
    let request = NewComment::new(image_info, "Look here")
        .with_creator(Agent::person("Ada"))
        .with_generator(Agent::software("viewer").with_homepage("https://example.org"));
    let mut annotation = Annotation::comment(request, &DefaultClock);
    annotation
        .select_region(Region::new(1, 2, 3, 4))
        .expect("region inside image");

    let json = annotation.to_record().to_json().expect("record serialises");

    assert_eq!(json["motivation"], "commenting");
    assert_eq!(
        json["target"]["selector"],
        json!({
            "type": "FragmentSelector",
            "conformsTo": "http://www.w3.org/TR/media-frags/",
            "value": "xywh=1,2,3,4"
        })
    );
    assert_eq!(json["creator"], json!({ "type": "Person", "name": "Ada" }));
    assert_eq!(
        json["generator"],
        json!({ "type": "Software", "name": "viewer", "homepage": "https://example.org" })
    );
    assert!(json.get("generated").is_some());
    assert!(json.get("tags").is_none());
}

#[rstest]
fn record_omits_fragment_for_whole_target_tags(image_info: ImageInfo) {
    let request = NewDescription::new(image_info, "sky")
        .with_tag("weather", None)
        .with_classification("landscape");
    let record = Annotation::description(request, &DefaultClock).to_record();

    let json = record.to_json().expect("record serialises");

    assert_eq!(json["tags"], json!([{ "tag": "weather" }]));
    assert_eq!(json["classification"], "landscape");
}
