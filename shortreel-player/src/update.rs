use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::{feed, player};
use crate::state::State;

use iced::Task;

/// Root update: route to the owning domain
pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("[Update] {}", message.name());

    let result = match message {
        DomainMessage::Feed(msg) => feed::update::update_feed(state, msg),
        DomainMessage::Player(msg) => {
            player::update::update_player(state, msg)
        }
        DomainMessage::NoOp => DomainUpdateResult::none(),
    };

    result.task
}
