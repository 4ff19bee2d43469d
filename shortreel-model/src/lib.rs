//! Core data model definitions shared across shortreel crates.
//!
//! The dataset is read-only input: categories in display order, each owning
//! the ordered list of videos that also forms the "up next" scope while one
//! of them is playing.
#![allow(missing_docs)]

pub mod category;
pub mod dataset;
pub mod error;
pub mod media;
pub mod media_type;
pub mod urls;

pub use category::{CategoryGroup, CategoryMeta};
pub use dataset::VideoDataset;
pub use error::{ModelError, Result as ModelResult};
pub use media::VideoItem;
pub use media_type::MediaType;
pub use urls::youtube_video_id;
