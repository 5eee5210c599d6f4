pub mod creator;
pub mod identity;
pub mod video;
pub mod video_category;
