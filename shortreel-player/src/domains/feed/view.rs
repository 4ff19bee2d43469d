use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding};

use shortreel_model::{CategoryGroup, VideoDataset, VideoItem};

use super::messages::FeedMessage;
use super::theme;
use crate::domains::player::{PlayerMode, PlayerStore};
use crate::infra::constants::feed;

pub const BRAND: &str = "Dino Ventures";
pub const TAGLINE: &str = "Learn AI, content, and income with short videos";
const CHANNEL_LINE: &str = "Dino Ventures • 42K views • 2 days ago";

/// Bottom padding so the last card is not covered by the mini player.
pub fn bottom_clearance(store: &PlayerStore) -> f32 {
    if store.mode() == PlayerMode::Mini && store.current_video().is_some() {
        feed::MINI_PLAYER_CLEARANCE
    } else {
        feed::DEFAULT_BOTTOM_PADDING
    }
}

pub fn view_feed<'a>(
    dataset: &'a VideoDataset,
    store: &PlayerStore,
) -> Element<'a, FeedMessage> {
    let header = column![
        text(BRAND).size(26),
        text(TAGLINE).size(13),
    ]
    .spacing(4);

    let sections = dataset.categories.iter().fold(
        Column::new().spacing(feed::SECTION_SPACING),
        |sections, group| sections.push(category_section(group)),
    );

    let content = column![header, sections]
        .spacing(24)
        .max_width(feed::MAX_WIDTH)
        .padding(Padding {
            top: 24.0,
            right: 16.0,
            bottom: bottom_clearance(store),
            left: 16.0,
        });

    container(scrollable(container(content).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::container_feed)
        .into()
}

fn category_section(group: &CategoryGroup) -> Element<'_, FeedMessage> {
    let count = match group.len() {
        1 => "1 video".to_string(),
        n => format!("{n} videos"),
    };
    let header = row![
        text(&group.category.name).size(20).width(Length::Fill),
        text(count).size(12),
    ]
    .align_y(Alignment::Center);

    let cards = group.contents.iter().fold(
        Column::new().spacing(feed::CARD_SPACING),
        |cards, video| cards.push(video_card(group, video)),
    );

    column![header, cards].spacing(12).into()
}

fn video_card<'a>(
    group: &'a CategoryGroup,
    video: &'a VideoItem,
) -> Element<'a, FeedMessage> {
    let badge = container(text(&group.category.name).size(11))
        .padding([4, 10])
        .style(theme::container_badge);

    let thumbnail = container(
        column![
            badge,
            container(text(video.media_type.to_string()).size(12))
                .center(Length::Fill),
        ]
        .padding(12),
    )
    .width(Length::Fill)
    .height(feed::CARD_THUMB_HEIGHT)
    .style(theme::container_thumbnail);

    let avatar = container(text(video.initials()).size(13))
        .center(36)
        .style(theme::container_avatar);

    let meta = row![
        avatar,
        column![
            text(&video.title).size(15),
            text(CHANNEL_LINE).size(11),
        ]
        .spacing(4)
        .width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    button(column![thumbnail, meta].spacing(10))
        .width(Length::Fill)
        .padding(0)
        .on_press(FeedMessage::SelectVideo {
            category: group.slug().to_string(),
            video: video.slug.clone(),
        })
        .style(theme::button_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortreel_model::{CategoryMeta, MediaType};

    fn group() -> CategoryGroup {
        CategoryGroup {
            category: CategoryMeta {
                slug: "ai".into(),
                name: "AI".into(),
                icon_url: String::new(),
            },
            contents: vec![VideoItem {
                title: "Intro".into(),
                media_url: "https://www.youtube.com/embed/abc".into(),
                media_type: MediaType::Embedded,
                thumbnail_url: String::new(),
                slug: "intro".into(),
            }],
        }
    }

    #[test]
    fn clearance_only_while_mini_player_shows() {
        let mut store = PlayerStore::new();
        assert_eq!(bottom_clearance(&store), feed::DEFAULT_BOTTOM_PADDING);

        let group = group();
        store.play_video(group.contents[0].clone(), group);
        assert_eq!(bottom_clearance(&store), feed::DEFAULT_BOTTOM_PADDING);

        store.set_mode(PlayerMode::Mini);
        assert_eq!(bottom_clearance(&store), feed::MINI_PLAYER_CLEARANCE);

        store.set_mode(PlayerMode::Hidden);
        assert_eq!(bottom_clearance(&store), feed::DEFAULT_BOTTOM_PADDING);
    }
}
