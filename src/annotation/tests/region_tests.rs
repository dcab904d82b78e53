//! Tests for regions, media fragments and image information parsing.

use crate::annotation::domain::{AnnotationError, Fragment, ImageInfo, Region, Target};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("xywh=10,10,50,50", Region::new(10, 10, 50, 50))]
#[case("#xywh=0,5,20,30", Region::new(0, 5, 20, 30))]
#[case("?xywh=pixel:1,2,3,4", Region::new(1, 2, 3, 4))]
#[case(" xywh=7, 8, 9, 10 ", Region::new(7, 8, 9, 10))]
fn fragment_parse_accepts_xywh_forms(#[case] raw: &str, #[case] expected: Region) {
    let fragment = Fragment::parse(raw).expect("valid fragment");
    assert_eq!(fragment.region(), expected);
}

#[rstest]
#[case("10,10,50,50")]
#[case("xywh=10,10,50")]
#[case("xywh=10,10,50,50,1")]
#[case("xywh=a,b,c,d")]
#[case("xywh=percent:10,10,50,50")]
#[case("t=10,20")]
fn fragment_parse_rejects_malformed_values(#[case] raw: &str) {
    assert_eq!(
        Fragment::parse(raw),
        Err(AnnotationError::InvalidFragment(raw.to_owned()))
    );
}

#[rstest]
fn fragment_parse_rejects_zero_area_region() {
    assert_eq!(
        Fragment::parse("xywh=10,10,0,50"),
        Err(AnnotationError::EmptyRegion)
    );
}

#[rstest]
fn fragment_display_uses_canonical_xywh_form() {
    let fragment = Fragment::parse("#xywh=pixel:1,2,3,4").expect("valid fragment");
    assert_eq!(fragment.to_string(), "xywh=1,2,3,4");
}

#[rstest]
fn fragment_deserialises_from_string() {
    let fragment: Fragment =
        serde_json::from_value(json!("xywh=10,20,30,40")).expect("fragment should deserialise");
    assert_eq!(fragment.region(), Region::new(10, 20, 30, 40));
    assert!(serde_json::from_value::<Fragment>(json!("nonsense")).is_err());
}

#[rstest]
fn region_fits_within_checks_far_edges() {
    let region = Region::new(50, 50, 50, 50);
    assert!(region.fits_within(100, 100));
    assert!(!region.fits_within(99, 100));
    assert!(!region.fits_within(100, 99));
    assert!(!Region::new(u32::MAX, 0, 1, 1).fits_within(u32::MAX, 1));
}

#[rstest]
fn image_info_reads_image_api_2_document() {
    let document = json!({
        "@context": "http://iiif.io/api/image/2/context.json",
        "@id": "https://iiif.example.org/image/abc",
        "protocol": "http://iiif.io/api/image",
        "width": 6000,
        "height": 4000
    });

    let info = ImageInfo::from_json(&document).expect("valid image info");

    assert_eq!(info.id(), "https://iiif.example.org/image/abc");
    assert_eq!(info.width(), 6000);
    assert_eq!(info.height(), 4000);
    assert_eq!(info.full_region(), Region::new(0, 0, 6000, 4000));
}

#[rstest]
fn image_info_reads_image_api_3_document() {
    let document = json!({
        "id": "https://iiif.example.org/v3/image/abc",
        "type": "ImageService3",
        "width": 800,
        "height": 600
    });

    let info = ImageInfo::from_json(&document).expect("valid image info");
    assert_eq!(info.id(), "https://iiif.example.org/v3/image/abc");
}

#[rstest]
#[case(json!({"width": 10, "height": 10}))]
#[case(json!({"@id": "https://x/img", "height": 10}))]
#[case(json!({"@id": "https://x/img", "width": "wide", "height": 10}))]
#[case(json!({"@id": "https://x/img", "width": 0, "height": 10}))]
#[case(json!({"@id": "  ", "width": 10, "height": 10}))]
#[case(json!([]))]
fn image_info_rejects_incomplete_documents(#[case] document: serde_json::Value) {
    assert!(matches!(
        ImageInfo::from_json(&document),
        Err(AnnotationError::InvalidImageInfo(_))
    ));
}

#[rstest]
fn target_select_rejects_regions_outside_the_image() {
    let info = ImageInfo::new("https://x/img", 100, 80).expect("valid image info");
    let mut target = Target::from_image_info(&info);

    let result = target.select(Region::new(60, 0, 50, 10));

    assert_eq!(
        result,
        Err(AnnotationError::RegionOutOfBounds {
            region: "60,0,50,10".to_owned(),
            width: 100,
            height: 80,
        })
    );
    assert!(target.selector().is_none());
    assert_eq!(target.region(), Region::new(0, 0, 100, 80));
}

#[rstest]
fn target_select_and_clear_round_trip_to_full_image() {
    let info = ImageInfo::new("https://x/img", 100, 80).expect("valid image info");
    let mut target = Target::from_image_info(&info);

    target
        .select(Region::new(10, 10, 20, 20))
        .expect("region inside image");
    assert_eq!(
        target.selector().map(|selector| selector.value()),
        Some("xywh=10,10,20,20".to_owned())
    );

    target.clear_selection();
    assert!(target.selector().is_none());
    assert_eq!(target.source(), "https://x/img");
}
