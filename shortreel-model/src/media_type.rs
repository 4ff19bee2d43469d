use std::fmt::{Display, Formatter};

/// How a video is played back.
///
/// The dataset spells these `"YOUTUBE"` and `"MP4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    /// Played through the script-injected third-party player
    #[cfg_attr(feature = "serde", serde(rename = "YOUTUBE"))]
    Embedded,
    /// Played natively from the media URL, with native transport controls
    #[cfg_attr(feature = "serde", serde(rename = "MP4"))]
    Direct,
}

impl MediaType {
    pub fn is_embedded(self) -> bool {
        matches!(self, MediaType::Embedded)
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Embedded => write!(f, "YOUTUBE"),
            MediaType::Direct => write!(f, "MP4"),
        }
    }
}
