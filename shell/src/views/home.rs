use crate::views::video_card::{VideoCard, cards};

use serde::Serialize;
use vh_core::{Identity, MockCatalog};

const SECTION_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub welcome: String,
    pub recent: Vec<VideoCard>,
    pub trending: Vec<VideoCard>,
}

impl HomePage {
    pub fn render(identity: Option<&Identity>, catalog: &MockCatalog) -> Self {
        let welcome = match identity {
            Some(identity) => format!("Welcome back, {}", identity.name),
            None => String::from("Welcome back"),
        };

        Self {
            welcome,
            recent: cards(catalog.recent(SECTION_SIZE)),
            trending: cards(catalog.trending(SECTION_SIZE)),
        }
    }
}
