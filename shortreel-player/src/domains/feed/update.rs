use super::messages::FeedMessage;

use crate::common::messages::DomainUpdateResult;
use crate::domains::player::update::reconcile_selection;
use crate::state::State;

use log::{info, warn};

/// Handle feed domain messages
pub fn update_feed(
    app_state: &mut State,
    message: FeedMessage,
) -> DomainUpdateResult {
    match message {
        FeedMessage::SelectVideo { category, video } => {
            let Some((group, item)) = app_state.dataset.lookup(&category, &video)
            else {
                warn!("[Feed] Unknown selection `{category}/{video}`");
                return DomainUpdateResult::none();
            };
            info!("[Feed] Selected `{}` from `{}`", item.title, group.slug());

            let (group, item) = (group.clone(), item.clone());
            app_state.player_store.play_video(item, group);
            DomainUpdateResult::task(reconcile_selection(app_state))
        }
    }
}
