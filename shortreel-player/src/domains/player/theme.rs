use iced::{
    Background, Border, Color, Shadow, Vector,
    widget::{button, container},
};

const SURFACE: Color = Color {
    r: 0.07,
    g: 0.07,
    b: 0.09,
    a: 1.0,
};
pub const ACCENT: Color = Color {
    r: 0.98,
    g: 0.36,
    b: 0.25,
    a: 1.0,
};

// Container styles
pub fn container_full_player(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn container_header(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0, 0.0, 0.0, 0.85,
        ))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn container_video_surface(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        text_color: Some(Color::from_rgb(0.8, 0.8, 0.85)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_up_next(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(
            0.1, 0.1, 0.12,
        ))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_thumb(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(
            0.2, 0.2, 0.24,
        ))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_mini_bar(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(
            0.12, 0.12, 0.14,
        ))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, -4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// Button styles
pub fn button_player(
    _theme: &iced::Theme,
    status: button::Status,
) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.2,
        button::Status::Pressed => 0.3,
        _ => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(
            1.0, 1.0, 1.0, alpha,
        ))),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 22.0.into(),
        },
        ..Default::default()
    }
}

pub fn button_play(
    _theme: &iced::Theme,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgb(1.0, 0.45, 0.35)
        }
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 28.0.into(),
        },
        ..Default::default()
    }
}

pub fn button_list_item(
    _theme: &iced::Theme,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgba(1.0, 1.0, 1.0, 0.06)
        }
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
