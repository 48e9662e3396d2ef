use iced::widget::image::Handle;
use iced::{Element, Size, Task, Theme};

mod config;
mod error;
mod loader;
mod preview;
mod state;
mod ui;

use config::GalleryConfig;
use error::LoadError;
use preview::{PreviewCache, PreviewSource};
use state::catalog::Catalog;
use state::gallery::{GalleryState, Interaction};

/// Main application state
struct ImageGallery {
    config: GalleryConfig,
    /// Catalog, filters, results and selection
    state: GalleryState,
    /// Card previews fetched so far
    previews: PreviewCache,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The image document finished loading
    CatalogLoaded(Result<Catalog, LoadError>),
    /// User interacted with the controls, a card or the overlay
    Interact(Interaction),
    /// A background preview request completed
    PreviewLoaded(String, Result<Handle, String>),
    /// User activated the link in the detail overlay
    OpenLink(String),
}

impl ImageGallery {
    /// Create the application and start loading the image document
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let load = Task::perform(
            loader::load_catalog(config.document.clone()),
            Message::CatalogLoaded,
        );

        (
            ImageGallery {
                config,
                state: GalleryState::new(),
                previews: PreviewCache::default(),
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.state.install_catalog(catalog);
                self.request_previews()
            }
            Message::CatalogLoaded(Err(err)) => {
                tracing::error!("❌ {}", err);
                self.state.fail(err);
                Task::none()
            }
            Message::Interact(interaction) => {
                if self.state.dispatch(interaction) {
                    self.request_previews()
                } else {
                    Task::none()
                }
            }
            Message::PreviewLoaded(url, result) => {
                self.previews.finish(url, result);
                Task::none()
            }
            Message::OpenLink(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!("⚠️  Could not open {}: {}", url, e);
                }
                Task::none()
            }
        }
    }

    /// Start preview downloads for visible cards that have none yet
    fn request_previews(&mut self) -> Task<Message> {
        let Some(results) = self.state.results() else {
            return Task::none();
        };

        let urls = self.previews.claim(
            results
                .records(self.state.catalog())
                .map(|(_, record)| record.url.as_str()),
        );

        if urls.is_empty() {
            return Task::none();
        }

        tracing::debug!("⏳ Requesting {} previews", urls.len());

        let size = self.config.preview_size;
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .map(|url| {
                let source = PreviewSource::resolve(&self.config.document, &url);
                Task::perform(preview::load_preview(source, size), move |result| {
                    Message::PreviewLoaded(url.clone(), result)
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::window(ui::render::describe(&self.state), &self.previews, &self.config)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = GalleryConfig::default();
    let (width, height) = config.window_size;

    tracing::info!("🎨 Image Gallery starting, document: {}", config.document.describe());

    iced::application("Image Gallery", ImageGallery::update, ImageGallery::view)
        .theme(ImageGallery::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || ImageGallery::new(config))
}
