use std::marker::PhantomData;

use vitaline_core::score::gradient::GradientScale;

pub mod element;
pub mod theme;

/// The draggable gradient slider. It owns no score state of its own: the
/// current value and the in-flight drag flag are passed down from the owning
/// element, and every cursor sample is reported back through `on_change`.
pub struct ScoreSlider<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    value: u32,
    scale: &'a GradientScale,
    dragging: bool,
    width: iced::Length,
    on_drag_start: Option<Message>,
    on_drag_end: Option<Message>,
    on_change: Option<Box<dyn Fn(u32) -> Message + 'a>>,
    _phantom: PhantomData<(Theme, Renderer)>,
}

impl<'a, Message, Theme, Renderer> ScoreSlider<'a, Message, Theme, Renderer> {
    pub fn new(value: u32, scale: &'a GradientScale) -> Self {
        ScoreSlider {
            value,
            scale,
            dragging: false,
            width: iced::Length::Fill,
            on_drag_start: None,
            on_drag_end: None,
            on_change: None,
            _phantom: Default::default(),
        }
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn width(self, width: impl Into<iced::Length>) -> Self {
        ScoreSlider {
            width: width.into(),
            ..self
        }
    }

    pub fn on_drag_start(mut self, message: Message) -> Self {
        self.on_drag_start = Some(message);
        self
    }

    pub fn on_drag_end(mut self, message: Message) -> Self {
        self.on_drag_end = Some(message);
        self
    }

    pub fn on_change(mut self, f: impl Fn(u32) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }
}
