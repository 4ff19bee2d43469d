use crate::media::VideoItem;

/// Display metadata for a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CategoryMeta {
    pub slug: String,
    pub name: String,
    pub icon_url: String,
}

/// A category together with its ordered videos.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryGroup {
    pub category: CategoryMeta,
    pub contents: Vec<VideoItem>,
}

impl CategoryGroup {
    pub fn slug(&self) -> &str {
        &self.category.slug
    }

    pub fn video(&self, slug: &str) -> Option<&VideoItem> {
        self.contents.iter().find(|video| video.slug == slug)
    }

    /// Every video in the group except the one with `current_slug`, in
    /// dataset order.
    pub fn related_to<'a>(
        &'a self,
        current_slug: &'a str,
    ) -> impl Iterator<Item = &'a VideoItem> + 'a {
        self.contents
            .iter()
            .filter(move |video| video.slug != current_slug)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
