use crate::media_type::MediaType;
use crate::urls::youtube_video_id;

/// A single playable video from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VideoItem {
    pub title: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub thumbnail_url: String,
    /// Unique within the owning category
    pub slug: String,
}

impl VideoItem {
    pub fn is_embedded(&self) -> bool {
        self.media_type.is_embedded()
    }

    /// Identifier for the embedded player, `None` for direct media or when
    /// the URL carries no identifier.
    pub fn embed_video_id(&self) -> Option<String> {
        if !self.is_embedded() {
            return None;
        }
        let id = youtube_video_id(&self.media_url);
        (!id.is_empty()).then_some(id)
    }

    /// Up to two uppercase initials taken from the title's words.
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
