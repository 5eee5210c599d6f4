use crate::{ChannelStats, MockCatalog};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_default_catalog_when_all_then_returns_eight_videos() {
    let catalog = MockCatalog::new();

    assert_that!(catalog.all().len(), eq(8));
}

#[test]
fn given_known_id_when_find_then_returns_video() {
    let catalog = MockCatalog::new();

    let video = catalog.find("3").unwrap();

    assert_that!(video.title.as_str(), eq("Building a Netflix Clone"));
    assert_that!(video.duration, eq(3600));
}

#[test]
fn given_unknown_id_when_find_then_none() {
    let catalog = MockCatalog::new();

    assert_that!(catalog.find("999"), none());
}

#[test]
fn given_unknown_id_when_find_or_default_then_first_video() {
    let catalog = MockCatalog::new();

    let video = catalog.find_or_default("999").map(|v| v.id.as_str());

    assert_that!(video, some(eq("1")));
}

#[test]
fn given_empty_catalog_when_find_or_default_then_none() {
    let catalog = MockCatalog::from_videos(Vec::new());

    assert_that!(catalog.find_or_default("1"), none());
}

#[test]
fn given_catalog_when_recent_then_newest_first_and_limited() {
    let catalog = MockCatalog::new();

    let ids: Vec<&str> = catalog.recent(6).iter().map(|v| v.id.as_str()).collect();

    assert_that!(ids, eq(&vec!["1", "2", "3", "4", "5", "6"]));
}

#[test]
fn given_catalog_when_trending_then_most_viewed_first() {
    let catalog = MockCatalog::new();

    let ids: Vec<&str> = catalog.trending(3).iter().map(|v| v.id.as_str()).collect();

    assert_that!(ids, eq(&vec!["5", "7", "3"]));
}

#[test]
fn given_limit_above_size_when_trending_then_returns_everything() {
    let catalog = MockCatalog::new();

    assert_that!(catalog.trending(100).len(), eq(8));
}

#[test]
fn given_video_id_when_related_then_excludes_that_video() {
    let catalog = MockCatalog::new();

    let related = catalog.related("1", 4);

    assert_that!(related.len(), eq(4));
    assert!(related.iter().all(|v| v.id != "1"));
}

#[test]
fn given_videos_when_channel_stats_then_sums_views_and_counts() {
    let catalog = MockCatalog::new();

    let stats = ChannelStats::from_videos(catalog.all());

    assert_that!(stats.upload_count, eq(8));
    assert_that!(stats.total_views, eq(150_670));
}

#[test]
fn given_no_videos_when_channel_stats_then_zeroes() {
    let stats = ChannelStats::from_videos(std::iter::empty());

    assert_that!(stats, eq(ChannelStats::default()));
}

#[test]
fn given_seed_video_when_has_tag_then_matches_case_insensitively() {
    let catalog = MockCatalog::new();
    let video = catalog.find("5").unwrap();

    assert!(video.has_tag("ai"));
    assert!(!video.has_tag("cooking"));
}
