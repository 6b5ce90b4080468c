//! Video upload payload

use api::UploadFile;
use catalog::Category;

/// Everything needed to publish a new video
#[derive(Debug, Clone)]
pub struct VideoUpload {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub video: UploadFile,
    pub thumbnail: Option<UploadFile>,
}

impl VideoUpload {
    pub fn new(title: impl Into<String>, category: Category, video: UploadFile) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category,
            tags: Vec::new(),
            is_public: true,
            video,
            thumbnail: None,
        }
    }

    /// Total number of file bytes that will be sent
    pub fn total_bytes(&self) -> u64 {
        self.video.len() + self.thumbnail.as_ref().map_or(0, UploadFile::len)
    }
}
