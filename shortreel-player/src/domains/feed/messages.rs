#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// A feed card was tapped.
    SelectVideo { category: String, video: String },
}

pub use Message as FeedMessage;

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectVideo { .. } => "Feed::SelectVideo",
        }
    }
}
