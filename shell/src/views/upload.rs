use serde::Serialize;
use vh_core::VideoCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPage {
    pub categories: Vec<CategoryOption>,
    pub default_category: &'static str,
}

impl UploadPage {
    pub fn render() -> Self {
        Self {
            categories: VideoCategory::UPLOAD_OPTIONS
                .iter()
                .map(|category| CategoryOption {
                    value: category.as_str(),
                    label: category.label(),
                })
                .collect(),
            default_category: VideoCategory::default().as_str(),
        }
    }
}
