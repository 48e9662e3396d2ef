/// Card grid, stats line and preview placeholders

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::config::GalleryConfig;
use crate::preview::{Preview, PreviewCache};
use crate::state::gallery::Interaction;
use crate::ui::render::{CardView, ResultsView, StatsView};
use crate::Message;

/// Gallery area: nothing, the "no results" text, or a wrapping grid of cards
pub fn results_area<'a>(
    results: ResultsView<'a>,
    previews: &'a PreviewCache,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    match results {
        ResultsView::Blank => column![].into(),
        ResultsView::Placeholder(message) => container(text(message).size(18))
            .width(Length::Fill)
            .padding(40)
            .center_x(Length::Fill)
            .into(),
        ResultsView::Cards(cards) => {
            let cards: Vec<Element<'a, Message>> = cards
                .into_iter()
                .map(|card| {
                    let preview = previews.get(card.url);
                    card_view(card, preview, config)
                })
                .collect();

            scrollable(
                Wrap::with_elements(cards)
                    .spacing(Pixels(12.0))
                    .line_spacing(Pixels(12.0)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        }
    }
}

fn card_view<'a>(
    card: CardView<'a>,
    preview: Option<&'a Preview>,
    config: &GalleryConfig,
) -> Element<'a, Message> {
    let content = column![
        preview_image(preview, config.card_image_height),
        text(card.title).size(16),
        text(card.rating).size(14),
    ]
    .spacing(6);

    button(content)
        .on_press(Message::Interact(Interaction::CardClicked(card.index)))
        .padding(8)
        .width(Length::Fixed(config.card_width))
        .style(button::secondary)
        .into()
}

/// Decoded preview, or a text placeholder while loading / after failure
pub fn preview_image<'a>(preview: Option<&'a Preview>, height: f32) -> Element<'a, Message> {
    let label = match preview {
        Some(Preview::Ready(handle)) => {
            return image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .into();
        }
        Some(Preview::Failed) => "Preview unavailable",
        Some(Preview::Loading) | None => "Loading…",
    };

    container(text(label).size(14))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}

pub fn stats_line<'a>(stats: StatsView) -> Element<'a, Message> {
    row![
        text(format!("Images: {}", stats.count)).size(16),
        text(format!("Average rating: {}", stats.average)).size(16),
    ]
    .spacing(24)
    .into()
}
