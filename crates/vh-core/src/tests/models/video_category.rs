use crate::VideoCategory;

use std::str::FromStr;

#[test]
fn test_video_category_as_str() {
    assert_eq!(VideoCategory::Education.as_str(), "education");
    assert_eq!(VideoCategory::Technology.as_str(), "technology");
    assert_eq!(VideoCategory::Career.as_str(), "career");
}

#[test]
fn test_video_category_from_str() {
    assert_eq!(
        VideoCategory::from_str("education").unwrap(),
        VideoCategory::Education
    );
    assert_eq!(
        VideoCategory::from_str("travel").unwrap(),
        VideoCategory::Travel
    );
    assert!(VideoCategory::from_str("invalid").is_err());
    assert!(VideoCategory::from_str("Education").is_err());
}

#[test]
fn test_video_category_default() {
    assert_eq!(VideoCategory::default(), VideoCategory::Other);
}

#[test]
fn test_video_category_display_matches_as_str() {
    for category in VideoCategory::UPLOAD_OPTIONS {
        assert_eq!(category.to_string(), category.as_str());
        assert_eq!(VideoCategory::from_str(category.as_str()).unwrap(), category);
    }
}

#[test]
fn test_upload_options_exclude_career() {
    assert!(!VideoCategory::UPLOAD_OPTIONS.contains(&VideoCategory::Career));
    assert_eq!(VideoCategory::UPLOAD_OPTIONS.last(), Some(&VideoCategory::Other));
}

#[test]
fn test_video_category_serde_snake_case() {
    let json = serde_json::to_string(&VideoCategory::Technology).unwrap();
    assert_eq!(json, "\"technology\"");
}
