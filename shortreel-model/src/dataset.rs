use std::collections::HashSet;

use crate::category::CategoryGroup;
use crate::error::{ModelError, Result};
use crate::media::VideoItem;

/// The full, read-only feed dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoDataset {
    pub categories: Vec<CategoryGroup>,
}

impl VideoDataset {
    pub fn new(categories: Vec<CategoryGroup>) -> Result<Self> {
        let dataset = Self { categories };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Decode and validate a dataset from its JSON representation.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(raw)?;
        dataset.validate()?;
        Ok(dataset)
    }

    #[cfg(feature = "serde")]
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Category slugs must be unique, video slugs unique within their
    /// category, and titles/URLs non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut category_slugs = HashSet::new();
        for group in &self.categories {
            let slug = group.slug();
            if slug.trim().is_empty() {
                return Err(ModelError::InvalidDataset(
                    "category with empty slug".into(),
                ));
            }
            if !category_slugs.insert(slug) {
                return Err(ModelError::InvalidDataset(format!(
                    "duplicate category slug `{slug}`"
                )));
            }

            let mut video_slugs = HashSet::new();
            for video in &group.contents {
                if video.slug.trim().is_empty() {
                    return Err(ModelError::InvalidDataset(format!(
                        "video with empty slug in category `{slug}`"
                    )));
                }
                if !video_slugs.insert(video.slug.as_str()) {
                    return Err(ModelError::InvalidDataset(format!(
                        "duplicate video slug `{}` in category `{slug}`",
                        video.slug
                    )));
                }
                if video.title.trim().is_empty()
                    || video.media_url.trim().is_empty()
                {
                    return Err(ModelError::InvalidDataset(format!(
                        "video `{}` in category `{slug}` is missing a title \
                         or media url",
                        video.slug
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn category(&self, slug: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|group| group.slug() == slug)
    }

    /// Resolve a `(category, video)` slug pair.
    pub fn lookup(
        &self,
        category_slug: &str,
        video_slug: &str,
    ) -> Option<(&CategoryGroup, &VideoItem)> {
        let group = self.category(category_slug)?;
        let video = group.video(video_slug)?;
        Some((group, video))
    }

    pub fn video_count(&self) -> usize {
        self.categories.iter().map(CategoryGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
