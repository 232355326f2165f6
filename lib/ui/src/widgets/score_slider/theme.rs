use iced::widget::{container, text};
use iced::{gradient, Background, Border, Color, Gradient, Radians, Shadow, Theme};
use vitaline_core::score::gradient::{GradientScale, Rgb};

// Deep navy dashboard palette.
const BACKGROUND: Color = Color::from_rgb(0.055, 0.078, 0.161);
pub const TEXT_LIGHT: Color = Color::from_rgb(0.92, 0.95, 1.0);
pub const MARKING: Color = Color::from_rgb(194.0 / 255.0, 211.0 / 255.0, 1.0);

pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.red, rgb.green, rgb.blue)
}

/// Track fill built from the same stops `color_at` interpolates over.
pub fn track_background(scale: &GradientScale) -> Background {
    let mut linear = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2));
    for stop in scale.stops() {
        linear = linear.add_stop(stop.position, color(stop.color));
    }

    Background::Gradient(Gradient::Linear(linear))
}

pub fn screen_container(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(TEXT_LIGHT),
        background: Some(BACKGROUND.into()),
        border: Border {
            radius: 0.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
    }
}

pub fn heading_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(MARKING),
    }
}

pub fn score_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_LIGHT),
    }
}

pub fn marking_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(MARKING),
    }
}
