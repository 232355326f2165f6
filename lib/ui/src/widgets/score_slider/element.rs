use iced::{
    advanced::{layout, mouse, renderer, widget::Tree, Clipboard, Layout, Shell, Widget},
    event,
    widget::{horizontal_space, Column, Row, Text},
    Background, Border, Color, Element, Length, Rectangle, Shadow, Size,
};
use vitaline_core::score::{
    gradient::{health_scale, GradientScale},
    track,
};

use super::{theme, ScoreSlider};

const TRACK_HEIGHT: f32 = 15.0;
const POINTER_SIZE: f32 = 14.0;
const GRAB_RADIUS: f32 = 11.0;
const SLIDER_HEIGHT: f32 = POINTER_SIZE + TRACK_HEIGHT;

/// The screen-level element that owns the score. The slider below it is
/// stateless apart from gesture bookkeeping; every change flows through
/// [`Event`] and lands back here.
pub struct ScorePanel {
    value: u32,
    dragging: bool,
    scale: GradientScale,
}

#[derive(Clone, Debug)]
pub enum Event {
    DragStart,
    ScoreChanged(u32),
    DragEnd,
}

impl ScorePanel {
    pub fn new(value: u32) -> Self {
        Self {
            value: value.min(track::SCORE_MAX),
            dragging: false,
            scale: health_scale(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn update(&mut self, message: Event) {
        match message {
            Event::DragStart => {
                self.dragging = true;
            }
            Event::ScoreChanged(value) => {
                self.value = value.min(track::SCORE_MAX);
            }
            Event::DragEnd => {
                self.dragging = false;
                tracing::debug!("drag settled at score {}", self.value);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let slider = ScoreSlider::new(self.value, &self.scale)
            .width(Length::Fill)
            .dragging(self.dragging)
            .on_drag_start(Event::DragStart)
            .on_drag_end(Event::DragEnd)
            .on_change(Event::ScoreChanged);

        let mut markings = Row::new().width(Length::Fill);
        for (index, tick) in track::tick_values().enumerate() {
            if index > 0 {
                markings = markings.push(horizontal_space());
            }
            markings = markings.push(Text::new(tick.to_string()).size(12).style(theme::marking_text));
        }

        Column::new()
            .push(Text::new("Health Score").size(18).style(theme::heading_text))
            .push(Text::new(self.value.to_string()).size(44).style(theme::score_text))
            .push(slider)
            .push(markings)
            .spacing(12)
            .max_width(420.0)
            .into()
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScoreSlider<'a, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Fixed(SLIDER_HEIGHT),
        }
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.resolve(
            self.width,
            Length::Fixed(SLIDER_HEIGHT),
            Size::ZERO,
        ))
    }

    fn draw(
        &self,
        _state: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        let track = renderer::Quad {
            bounds: Rectangle {
                x: bounds.x,
                y: bounds.y + POINTER_SIZE,
                width: bounds.width,
                height: TRACK_HEIGHT,
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (TRACK_HEIGHT / 2.0).into(),
            },
            shadow: Shadow::default(),
        };
        renderer.fill_quad(track, theme::track_background(self.scale));

        // The pointer samples the same stops the track is filled with, so
        // the two agree at every position.
        let offset = track::pointer_offset(self.value, bounds.width);
        let pointer_color = self.scale.color_at(track::normalized(self.value));

        let pointer = renderer::Quad {
            bounds: Rectangle {
                x: bounds.x + offset - POINTER_SIZE / 2.0,
                y: bounds.y,
                width: POINTER_SIZE,
                height: POINTER_SIZE,
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (POINTER_SIZE / 2.0).into(),
            },
            shadow: Shadow::default(),
        };
        renderer.fill_quad(pointer, Background::Color(theme::color(pointer_color)));
    }

    fn on_event(
        &mut self,
        _state: &mut Tree,
        event: iced::Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let bounds = layout.bounds();

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    let pointer_x = bounds.x + track::pointer_offset(self.value, bounds.width);
                    if bounds.contains(position) && (position.x - pointer_x).abs() <= GRAB_RADIUS {
                        if let Some(ref message) = self.on_drag_start {
                            shell.publish(message.clone());
                        }
                        return event::Status::Captured;
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.dragging {
                    let value = track::drag_value(position.x, bounds.x, bounds.width);
                    if let Some(ref on_change) = self.on_change {
                        shell.publish((on_change)(value));
                    }
                    return event::Status::Captured;
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.dragging {
                    if let Some(ref message) = self.on_drag_end {
                        shell.publish(message.clone());
                    }
                    return event::Status::Captured;
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }
}

impl<'a, Message, Theme, Renderer> From<ScoreSlider<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a + Clone,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(slider: ScoreSlider<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slider)
    }
}
