//! Video entity - a single entry in the content catalog.

use crate::{Creator, VideoCategory};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    /// Length in seconds
    pub duration: u32,
    pub views: u64,
    pub likes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub creator: Creator,
    pub category: VideoCategory,
    pub tags: Vec<String>,
}

impl Video {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
