/// Toolkit-independent description of what the gallery shows.
///
/// `describe` turns application state into plain values; the iced
/// adapters in the sibling modules only lay those values out.

use crate::state::data::CategoryChoice;
use crate::state::gallery::{GalleryState, LoadStatus};

/// Placeholder shown when no record matches
pub const NO_RESULTS: &str = "No images found";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView<'a> {
    /// Document fetch still in flight
    pub loading: bool,
    /// Inline banner after a failed load
    pub error: Option<String>,
    /// Dropdown entries: "All" followed by observed non-empty categories
    pub categories: Vec<CategoryChoice>,
    pub selected_category: CategoryChoice,
    pub search: &'a str,
    pub results: ResultsView<'a>,
    pub stats: StatsView,
    pub detail: Option<DetailView<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    /// Nothing computed yet
    Blank,
    /// Filter matched nothing
    Placeholder(&'static str),
    Cards(Vec<CardView<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    /// Catalog position, sent back when the card is clicked
    pub index: usize,
    pub title: &'a str,
    pub url: &'a str,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub count: String,
    pub average: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub rating: String,
    pub category: &'a str,
}

/// Describe the whole window for the given state
pub fn describe(state: &GalleryState) -> GalleryView<'_> {
    let error = match state.status() {
        LoadStatus::Failed(err) => Some(err.to_string()),
        LoadStatus::Loading | LoadStatus::Ready => None,
    };

    let categories = std::iter::once(CategoryChoice::All)
        .chain(
            state
                .catalog()
                .categories()
                .iter()
                .filter(|name| !name.is_empty())
                .map(|name| CategoryChoice::Category(name.clone())),
        )
        .collect();

    let results = match state.results() {
        None => ResultsView::Blank,
        Some(results) if results.is_empty() => ResultsView::Placeholder(NO_RESULTS),
        Some(results) => ResultsView::Cards(
            results
                .records(state.catalog())
                .map(|(index, record)| CardView {
                    index,
                    title: &record.title,
                    url: &record.url,
                    rating: record.rating_label(),
                })
                .collect(),
        ),
    };

    let stats = state.stats();
    let stats = StatsView {
        count: stats.count.to_string(),
        average: stats.average_label(),
    };

    let detail = state.selected().map(|(_, record)| DetailView {
        title: &record.title,
        url: &record.url,
        rating: record.rating_label(),
        category: &record.category,
    });

    GalleryView {
        loading: matches!(state.status(), LoadStatus::Loading),
        error,
        categories,
        selected_category: CategoryChoice::from_filter(state.filter().category.as_deref()),
        search: &state.filter().search,
        results,
        stats,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::state::catalog::Catalog;
    use crate::state::data::{ImageRecord, SortOrder};
    use crate::state::gallery::Interaction;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ImageRecord {
                title: "Sunset".into(),
                url: "https://img.example.com/sunset.jpg".into(),
                category: "Nature".into(),
                rating: 4.5,
            },
            ImageRecord {
                title: "City".into(),
                url: "https://img.example.com/city.jpg".into(),
                category: "Urban".into(),
                rating: 4.0,
            },
        ])
    }

    #[test]
    fn test_cards_follow_result_order() {
        let mut state = GalleryState::new();
        state.install_catalog(catalog());
        state.dispatch(Interaction::SortChosen(SortOrder::Ascending));

        let view = describe(&state);

        let ResultsView::Cards(cards) = view.results else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "City");
        assert_eq!(cards[0].rating, "★4.0");
        assert_eq!(cards[0].index, 1);
        assert_eq!(cards[1].title, "Sunset");
        assert_eq!(view.stats, StatsView { count: "2".into(), average: "4.3".into() });
    }

    #[test]
    fn test_placeholder_when_nothing_matches() {
        let mut state = GalleryState::new();
        state.install_catalog(catalog());
        state.dispatch(Interaction::SearchEdited("zebra".into()));

        let view = describe(&state);

        assert_eq!(view.results, ResultsView::Placeholder(NO_RESULTS));
        assert_eq!(view.stats, StatsView { count: "0".into(), average: "0".into() });
        assert_eq!(view.search, "zebra");
    }

    #[test]
    fn test_category_options() {
        let mut state = GalleryState::new();
        state.install_catalog(catalog());
        state.dispatch(Interaction::CategorySelected(Some("Urban".into())));

        let view = describe(&state);

        assert_eq!(
            view.categories,
            [
                CategoryChoice::All,
                CategoryChoice::Category("Nature".into()),
                CategoryChoice::Category("Urban".into()),
            ]
        );
        assert_eq!(view.selected_category, CategoryChoice::Category("Urban".into()));
    }

    #[test]
    fn test_blank_category_folds_into_all() {
        let mut state = GalleryState::new();
        state.install_catalog(Catalog::new(vec![
            ImageRecord {
                title: "Untitled".into(),
                url: "untitled.jpg".into(),
                category: String::new(),
                rating: 2.0,
            },
            ImageRecord {
                title: "Sunset".into(),
                url: "sunset.jpg".into(),
                category: "Nature".into(),
                rating: 4.5,
            },
        ]));

        let view = describe(&state);
        assert_eq!(
            view.categories,
            [CategoryChoice::All, CategoryChoice::Category("Nature".into())]
        );
    }

    #[test]
    fn test_failed_load_shows_single_error() {
        let mut state = GalleryState::new();
        state.fail(LoadError::Status {
            url: "https://example.com/images.json".into(),
            status: 500,
        });

        let view = describe(&state);

        assert!(view.error.unwrap().contains("500"));
        assert_eq!(view.categories, [CategoryChoice::All]);
        assert_eq!(view.results, ResultsView::Blank);
        assert!(view.detail.is_none());
    }

    #[test]
    fn test_detail_fields() {
        let mut state = GalleryState::new();
        state.install_catalog(catalog());
        state.dispatch(Interaction::CardClicked(0));

        let detail = describe(&state).detail.unwrap();

        assert_eq!(
            detail,
            DetailView {
                title: "Sunset",
                url: "https://img.example.com/sunset.jpg",
                rating: "★4.5".into(),
                category: "Nature",
            }
        );

        state.dispatch(Interaction::DetailClosed);
        assert!(describe(&state).detail.is_none());
    }
}
