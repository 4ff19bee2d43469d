use crate::common::messages::DomainMessage;
use crate::domains::player;
use crate::state::State;
use iced::Subscription;

/// Collect subscriptions from every domain that has any
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    Subscription::batch([player::messages::subscriptions::subscription(state)])
}
