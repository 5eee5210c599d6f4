//! Mock content provider.
//!
//! Backs every page with a fixed in-memory collection. Queries never fail;
//! lookups by unknown id fall back to the first video.

pub mod channel_stats;
mod dataset;

use crate::Video;

use std::cmp::Reverse;

#[derive(Debug, Clone)]
pub struct MockCatalog {
    videos: Vec<Video>,
}

impl MockCatalog {
    /// Catalog seeded with the bundled demo videos.
    pub fn new() -> Self {
        Self {
            videos: dataset::videos(),
        }
    }

    pub fn from_videos(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    pub fn all(&self) -> &[Video] {
        &self.videos
    }

    pub fn find(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Returns the matching video, or the first one when `id` is unknown.
    /// `None` only for an empty catalog.
    pub fn find_or_default(&self, id: &str) -> Option<&Video> {
        self.find(id).or_else(|| self.videos.first())
    }

    /// Newest uploads first.
    pub fn recent(&self, limit: usize) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by_key(|v| Reverse(v.uploaded_at));
        videos.truncate(limit);
        videos
    }

    /// Most viewed first.
    pub fn trending(&self, limit: usize) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by_key(|v| Reverse(v.views));
        videos.truncate(limit);
        videos
    }

    /// Other videos to suggest next to `id`, in catalog order.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.id != id)
            .take(limit)
            .collect()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}
