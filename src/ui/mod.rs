/// User interface module
///
/// - `render.rs` - toolkit-independent description of the window
/// - `controls.rs` - filter form
/// - `gallery.rs` - card grid, stats line, previews
/// - `overlay.rs` - detail overlay

pub mod controls;
pub mod gallery;
pub mod overlay;
pub mod render;

use iced::widget::{column, container, text};
use iced::{Color, Element, Length};

use crate::config::GalleryConfig;
use crate::preview::PreviewCache;
use crate::Message;
use render::GalleryView;

/// Lay out the whole window from its description
pub fn window<'a>(
    view: GalleryView<'a>,
    previews: &'a PreviewCache,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    let mut content = column![text("Image Gallery").size(32)]
        .spacing(16)
        .padding(24);

    if let Some(message) = view.error.clone() {
        content = content.push(
            container(text(message).color(Color::from_rgb(0.95, 0.45, 0.45)))
                .padding(10)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    content = content.push(controls::control_bar(&view));

    if view.loading {
        content = content.push(text("Loading images...").size(14));
    }

    let GalleryView {
        results,
        stats,
        detail,
        ..
    } = view;

    content = content
        .push(gallery::stats_line(stats))
        .push(gallery::results_area(results, previews, config));

    let base: Element<'a, Message> = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match detail {
        Some(detail) => {
            let preview = previews.get(detail.url);
            overlay::detail_overlay(base, detail, preview)
        }
        None => base,
    }
}
