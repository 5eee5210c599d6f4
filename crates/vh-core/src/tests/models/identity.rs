use crate::Identity;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_identity_with_avatar_when_serialize_roundtrip_then_preserves_all_fields() {
    // Given
    let original = Identity::new("1", "alice@example.com", "alice")
        .with_avatar("https://i.pravatar.cc/150?u=alice@example.com");

    // When
    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    // Then
    assert_that!(restored, eq(&original));
}

#[test]
fn given_stored_json_without_avatar_when_deserialize_then_avatar_is_none() {
    // Given
    let json = r#"{"id":"1","email":"a@x.com","name":"a"}"#;

    // When
    let identity: Identity = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(identity.avatar, none());
    assert_that!(identity.email.as_str(), eq("a@x.com"));
}

#[test]
fn given_identity_without_avatar_when_serialize_then_omits_field() {
    let json = serde_json::to_string(&Identity::new("1", "a@x.com", "a")).unwrap();

    assert!(!json.contains("avatar"));
}

#[test]
fn given_email_when_local_part_then_returns_text_before_at() {
    assert_that!(Identity::local_part("a@x.com"), eq("a"));
    assert_that!(Identity::local_part("first.last@mail.example.org"), eq("first.last"));
}

#[test]
fn given_email_without_at_when_local_part_then_returns_whole_string() {
    assert_that!(Identity::local_part("nobody"), eq("nobody"));
}

#[test]
fn given_email_with_several_ats_when_local_part_then_splits_on_first() {
    assert_that!(Identity::local_part("a@b@c"), eq("a"));
}

#[test]
fn given_builder_when_with_avatar_then_sets_avatar() {
    let identity = Identity::new("7", "b@y.com", "b").with_avatar("https://img/b");

    assert_that!(identity.avatar.as_deref(), some(eq("https://img/b")));
}
