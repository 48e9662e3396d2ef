/// Filter form: category dropdown, search field, apply and sort buttons

use iced::widget::{button, pick_list, row, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::{CategoryChoice, SortOrder};
use crate::state::gallery::Interaction;
use crate::ui::render::GalleryView;
use crate::Message;

pub fn control_bar<'a>(view: &GalleryView<'a>) -> Element<'a, Message> {
    let category = pick_list(
        view.categories.clone(),
        Some(view.selected_category.clone()),
        |choice: CategoryChoice| Message::Interact(Interaction::CategorySelected(choice.into_filter())),
    )
    .width(Length::Fixed(200.0))
    .padding(8);

    // No debounce: every keystroke recomputes the gallery
    let search = text_input("Search by title...", view.search)
        .on_input(|value| Message::Interact(Interaction::SearchEdited(value)))
        .on_submit(Message::Interact(Interaction::Submitted))
        .padding(8)
        .width(Length::Fill);

    row![
        category,
        search,
        button("Apply")
            .on_press(Message::Interact(Interaction::Submitted))
            .padding(8),
        button("Rating ↑")
            .on_press(Message::Interact(Interaction::SortChosen(SortOrder::Ascending)))
            .padding(8),
        button("Rating ↓")
            .on_press(Message::Interact(Interaction::SortChosen(SortOrder::Descending)))
            .padding(8),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
