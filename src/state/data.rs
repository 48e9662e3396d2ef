/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the loader, the filter pipeline and the UI layer.

use serde::Deserialize;
use std::fmt;

/// Represents a single image in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    /// Display title (e.g., "Sunset over the bay")
    pub title: String,
    /// Location of the image, absolute or relative to the document
    pub url: String,
    /// Free-form category name
    pub category: String,
    /// Rating, usually 0.0 to 5.0 (not enforced)
    pub rating: f64,
}

impl ImageRecord {
    /// Rating as shown on cards and in the detail overlay ("★4.0")
    pub fn rating_label(&self) -> String {
        format_rating(self.rating)
    }
}

/// Direction of the rating sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lowest rating first
    Ascending,
    /// Highest rating first
    Descending,
}

/// Current filter selection
///
/// `sort` is sticky: it is only replaced when the user picks a sort
/// direction, so it survives category and search changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// None (or an empty name) = all categories
    pub category: Option<String>,
    /// Case-insensitive title substring, matched untrimmed
    pub search: String,
    /// None = keep catalog order
    pub sort: Option<SortOrder>,
}

impl FilterState {
    /// Check whether a record passes the category and search filters
    pub fn matches(&self, record: &ImageRecord) -> bool {
        let matches_category = match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => record.category == category,
        };

        let matches_search = self.search.is_empty()
            || record
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        matches_category && matches_search
    }
}

/// Entry of the category dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    All,
    Category(String),
}

impl CategoryChoice {
    /// Convert the dropdown entry into the filter's category field
    ///
    /// An empty category name selects everything, same as "All".
    pub fn into_filter(self) -> Option<String> {
        match self {
            CategoryChoice::All => None,
            CategoryChoice::Category(name) if name.is_empty() => None,
            CategoryChoice::Category(name) => Some(name),
        }
    }

    pub fn from_filter(category: Option<&str>) -> Self {
        match category {
            None | Some("") => CategoryChoice::All,
            Some(name) => CategoryChoice::Category(name.to_string()),
        }
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::All => write!(f, "All categories"),
            CategoryChoice::Category(name) => write!(f, "{}", name),
        }
    }
}

/// Format a rating as a star glyph followed by one decimal ("★4.5")
pub fn format_rating(rating: f64) -> String {
    format!("★{}", format_one_decimal(rating))
}

/// Render a number with exactly one decimal place
///
/// Exact halves (x.25, x.75) round away from zero so that an average
/// of 2.0 and 2.5 reads "2.3". Everything else rounds on the exact
/// binary value, which `{:.1}` already does.
pub fn format_one_decimal(value: f64) -> String {
    // -0.0 prints as "0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    let quarters = value * 4.0;
    let is_exact_half = quarters.is_finite()
        && quarters.fract() == 0.0
        && quarters % 2.0 != 0.0;

    if is_exact_half {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
