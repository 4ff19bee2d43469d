//! Transport controls shown under the full player's video surface.

use iced::widget::{button, column, container, row, slider, text};
use iced::{Alignment, Element, Length};

use super::messages::PlayerMessage;
use super::theme;
use super::time_sync::PlaybackClock;
use crate::infra::units::format_time;

fn play_pause_label(is_playing: bool) -> &'static str {
    if is_playing { "❚❚" } else { "▶" }
}

/// Seek slider, time labels and -10 / play-pause / +10 for embedded media.
pub fn embedded_controls<'a>(
    clock: &PlaybackClock,
    is_playing: bool,
    skip_seconds: f64,
) -> Element<'a, PlayerMessage> {
    let seek_bar = slider(
        0.0..=clock.slider_max(),
        clock.current_time.min(clock.slider_max()),
        PlayerMessage::Seek,
    )
    .step(0.1)
    .width(Length::Fill);

    let times = row![
        text(format_time(clock.current_time)).size(12),
        container(text(format_time(clock.duration)).size(12))
            .width(Length::Fill)
            .align_right(Length::Fill),
    ]
    .width(Length::Fill);

    let skip = skip_seconds.round() as i64;
    let buttons = row![
        button(text(format!("-{skip}")).size(14))
            .on_press(PlayerMessage::SkipBack)
            .padding([10, 14])
            .style(theme::button_player),
        button(text(play_pause_label(is_playing)).size(20))
            .on_press(PlayerMessage::PlayPause)
            .padding([14, 20])
            .style(theme::button_play),
        button(text(format!("+{skip}")).size(14))
            .on_press(PlayerMessage::SkipForward)
            .padding([10, 14])
            .style(theme::button_player),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    column![
        seek_bar,
        times,
        container(buttons).center_x(Length::Fill),
    ]
    .spacing(8)
    .padding([12, 16])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_playing_flag() {
        assert_eq!(play_pause_label(true), "❚❚");
        assert_eq!(play_pause_label(false), "▶");
    }
}
