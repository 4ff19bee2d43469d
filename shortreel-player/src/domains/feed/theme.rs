use iced::{
    Background, Border, Color,
    widget::{button, container},
};

use crate::domains::player::theme::ACCENT;

pub fn container_feed(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(
            0.04, 0.04, 0.05,
        ))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn container_thumbnail(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(
            0.16, 0.16, 0.2,
        ))),
        text_color: Some(Color::from_rgb(0.85, 0.85, 0.9)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_avatar(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 18.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_badge(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            1.0, 1.0, 1.0, 0.12,
        ))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

pub fn button_card(
    _theme: &iced::Theme,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgba(1.0, 1.0, 1.0, 0.05)
        }
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}
