use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Catalog category a video is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoCategory {
    Education,
    Entertainment,
    Gaming,
    Music,
    Sports,
    Technology,
    Travel,
    Career,
    #[default]
    Other,
}

impl VideoCategory {
    /// Categories offered on the upload page, in display order.
    pub const UPLOAD_OPTIONS: [VideoCategory; 8] = [
        Self::Education,
        Self::Entertainment,
        Self::Gaming,
        Self::Music,
        Self::Sports,
        Self::Technology,
        Self::Travel,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Entertainment => "entertainment",
            Self::Gaming => "gaming",
            Self::Music => "music",
            Self::Sports => "sports",
            Self::Technology => "technology",
            Self::Travel => "travel",
            Self::Career => "career",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Gaming => "Gaming",
            Self::Music => "Music",
            Self::Sports => "Sports",
            Self::Technology => "Technology",
            Self::Travel => "Travel",
            Self::Career => "Career",
            Self::Other => "Other",
        }
    }
}

impl FromStr for VideoCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "education" => Ok(Self::Education),
            "entertainment" => Ok(Self::Entertainment),
            "gaming" => Ok(Self::Gaming),
            "music" => Ok(Self::Music),
            "sports" => Ok(Self::Sports),
            "technology" => Ok(Self::Technology),
            "travel" => Ok(Self::Travel),
            "career" => Ok(Self::Career),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::invalid_video_category(s)),
        }
    }
}

impl std::fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
