mod identity;
mod video_category;
