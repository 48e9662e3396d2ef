/// Detail overlay for a single image
///
/// Layers: base window -> dimmed backdrop -> centered panel.
/// A press on the backdrop closes the overlay; the panel itself is
/// opaque, so presses inside it never reach the backdrop.

use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, Element, Length};

use crate::preview::Preview;
use crate::state::gallery::Interaction;
use crate::ui::gallery::preview_image;
use crate::ui::render::DetailView;
use crate::Message;

/// Width of the detail panel
const PANEL_WIDTH: f32 = 560.0;

/// Height of the image inside the panel
const PANEL_IMAGE_HEIGHT: f32 = 360.0;

/// Message sent by both the close button and a backdrop press
fn close_message() -> Message {
    Message::Interact(Interaction::DetailClosed)
}

pub fn detail_overlay<'a>(
    base: Element<'a, Message>,
    detail: DetailView<'a>,
    preview: Option<&'a Preview>,
) -> Element<'a, Message> {
    let header = row![
        text(detail.title).size(24),
        horizontal_space(),
        button(text("×").size(24))
            .on_press(close_message())
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    // The raw URL is both the link text and the link target
    let link = button(text(detail.url))
        .on_press(Message::OpenLink(detail.url.to_string()))
        .padding(0)
        .style(button::text);

    let panel = container(
        column![
            header,
            preview_image(preview, PANEL_IMAGE_HEIGHT),
            text(format!("Rating: {}", detail.rating)),
            text(format!("Category: {}", detail.category)),
            row![text("Link:"), link].spacing(6),
        ]
        .spacing(12),
    )
    .width(Length::Fixed(PANEL_WIDTH))
    .padding(20)
    .style(container::rounded_box);

    let backdrop = center(opaque(panel)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![
        base,
        opaque(mouse_area(backdrop).on_press(close_message()))
    ]
    .into()
}
