// Message types are defined in their respective domains
use crate::domains::feed;
use crate::domains::player;

use iced::Task;

/// Result of a domain update: the follow-up task (may produce more messages)
pub struct DomainUpdateResult {
    pub task: Task<DomainMessage>,
}

impl DomainUpdateResult {
    /// Nothing further to run
    pub fn none() -> Self {
        Self { task: Task::none() }
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self { task }
    }
}

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// Feed domain
    Feed(feed::messages::Message),

    /// Player domain
    Player(player::messages::Message),

    NoOp,
}

// Automatic routing from domain messages
impl From<feed::messages::Message> for DomainMessage {
    fn from(msg: feed::messages::Message) -> Self {
        DomainMessage::Feed(msg)
    }
}

impl From<player::messages::Message> for DomainMessage {
    fn from(msg: player::messages::Message) -> Self {
        DomainMessage::Player(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feed(msg) => msg.name(),
            Self::Player(msg) => msg.name(),
            Self::NoOp => "DomainMessage::NoOp",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feed(msg) => write!(f, "DomainMessage::Feed({:?})", msg),
            Self::Player(msg) => write!(f, "DomainMessage::Player({:?})", msg),
            Self::NoOp => write!(f, "DomainMessage::NoOp"),
        }
    }
}
