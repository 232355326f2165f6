use iced::{widget::Container, Element, Length};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use vitaline_core::score::store::{ScoreStore, DEFAULT_SCORE};
use vitaline_ui::widgets::score_slider::element::{Event, ScorePanel};
use vitaline_ui::widgets::score_slider::theme;

fn main() -> iced::Result {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    iced::run("Vitaline", App::update, App::view)
}

pub struct App {
    panel: ScorePanel,
    store: ScoreStore,
}

#[derive(Clone, Debug)]
pub enum Message {
    Panel(Event),
}

impl Default for App {
    fn default() -> Self {
        let store = ScoreStore::open().expect("opening the score store failed");
        let score = store.load().unwrap_or_else(|e| {
            tracing::warn!("could not read saved health score: {e}");
            DEFAULT_SCORE
        });

        App {
            panel: ScorePanel::new(score),
            store,
        }
    }
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::Panel(event) => {
                let drag_ended = matches!(event, Event::DragEnd);
                self.panel.update(event);

                // The score is persisted once the drag settles, not on every
                // cursor sample.
                if drag_ended {
                    if let Err(e) = self.store.save(self.panel.value()) {
                        tracing::error!("failed to save health score: {e}");
                    }
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Container::new(self.panel.view().map(Message::Panel))
            .padding(24)
            .center(Length::Fill)
            .style(theme::screen_container)
            .into()
    }
}
