use serde::{Deserialize, Serialize};

/// Channel that published a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub subscribers: u64,
}
