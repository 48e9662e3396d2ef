/// Filter/sort pipeline
///
/// Pure functions from (catalog, filter state) to an ordered result set.
/// Nothing here is incremental: every call starts from the full catalog.

use std::cmp::Ordering;

use super::catalog::Catalog;
use super::data::{FilterState, ImageRecord, SortOrder};

/// Catalog positions matching the current filter, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    indices: Vec<usize>,
}

impl ResultSet {
    /// Catalog positions in display order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Walk the matching records together with their catalog positions
    pub fn records<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (usize, &'a ImageRecord)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&index| catalog.get(index).map(|record| (index, record)))
    }
}

/// Apply category/search filters, then the sticky sort order if one is set
pub fn apply(catalog: &Catalog, filter: &FilterState) -> ResultSet {
    let mut indices: Vec<usize> = catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(index, _)| index)
        .collect();

    if let Some(order) = filter.sort {
        let records = catalog.records();
        // sort_by is stable: equal ratings keep catalog order
        indices.sort_by(|&a, &b| compare_ratings(records[a].rating, records[b].rating, order));
    }

    ResultSet { indices }
}

/// Compare two ratings for the given direction
///
/// Incomparable values (NaN) and signed zeros are treated as equal so
/// they never disturb the relative order of their neighbours.
fn compare_ratings(a: f64, b: f64, order: SortOrder) -> Ordering {
    let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str, rating: f64) -> ImageRecord {
        ImageRecord {
            title: title.to_string(),
            url: format!("https://img.example.com/{}.jpg", title.to_lowercase()),
            category: category.to_string(),
            rating,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            record("Sunset", "Nature", 4.5),
            record("City", "Urban", 3.0),
            record("Forest", "Nature", 1.0),
            record("Sunrise", "Nature", 5.0),
            record("Alley", "Urban", 3.0),
        ])
    }

    fn titles<'a>(catalog: &'a Catalog, results: &'a ResultSet) -> Vec<&'a str> {
        results
            .records(catalog)
            .map(|(_, record)| record.title.as_str())
            .collect()
    }

    #[test]
    fn test_empty_filter_keeps_catalog_order() {
        let catalog = sample_catalog();
        let results = apply(&catalog, &FilterState::default());
        assert_eq!(results.indices(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::new(vec![
            record("Sunset", "Nature", 4.5),
            record("City", "Urban", 3.0),
        ]);
        let filter = FilterState {
            category: Some("Nature".to_string()),
            ..FilterState::default()
        };

        let results = apply(&catalog, &filter);

        assert_eq!(titles(&catalog, &results), ["Sunset"]);
    }

    #[test]
    fn test_search_any_case() {
        let catalog = sample_catalog();
        for term in ["sun", "SUN", "sUn"] {
            let filter = FilterState {
                search: term.to_string(),
                ..FilterState::default()
            };
            assert_eq!(titles(&catalog, &apply(&catalog, &filter)), ["Sunset", "Sunrise"]);
        }
    }

    #[test]
    fn test_results_are_subset_matching_predicate() {
        let catalog = sample_catalog();
        let filter = FilterState {
            category: Some("Urban".to_string()),
            search: "y".to_string(),
            sort: Some(SortOrder::Descending),
        };

        let results = apply(&catalog, &filter);

        for (index, record) in results.records(&catalog) {
            assert_eq!(catalog.get(index), Some(record));
            assert!(filter.matches(record));
        }
        let expected = catalog
            .records()
            .iter()
            .filter(|record| filter.matches(record))
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = sample_catalog();
        let filter = FilterState {
            sort: Some(SortOrder::Ascending),
            ..FilterState::default()
        };
        assert_eq!(apply(&catalog, &filter), apply(&catalog, &filter));
    }

    #[test]
    fn test_sort_descending() {
        let catalog = Catalog::new(vec![
            record("One", "A", 1.0),
            record("Five", "B", 5.0),
            record("Three", "A", 3.0),
        ]);
        let mut filter = FilterState {
            sort: Some(SortOrder::Descending),
            ..FilterState::default()
        };

        assert_eq!(titles(&catalog, &apply(&catalog, &filter)), ["Five", "Three", "One"]);

        // Sort order persists across a later filter change
        filter.category = Some("A".to_string());
        assert_eq!(titles(&catalog, &apply(&catalog, &filter)), ["Three", "One"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_ratings() {
        let catalog = sample_catalog();

        let ascending = FilterState {
            sort: Some(SortOrder::Ascending),
            ..FilterState::default()
        };
        assert_eq!(
            titles(&catalog, &apply(&catalog, &ascending)),
            ["Forest", "City", "Alley", "Sunset", "Sunrise"]
        );

        let descending = FilterState {
            sort: Some(SortOrder::Descending),
            ..FilterState::default()
        };
        assert_eq!(
            titles(&catalog, &apply(&catalog, &descending)),
            ["Sunrise", "Sunset", "City", "Alley", "Forest"]
        );
    }

    #[test]
    fn test_signed_zero_ratings_tie() {
        let catalog = Catalog::new(vec![record("A", "x", 0.0), record("B", "x", -0.0)]);
        let filter = FilterState {
            sort: Some(SortOrder::Ascending),
            ..FilterState::default()
        };
        assert_eq!(titles(&catalog, &apply(&catalog, &filter)), ["A", "B"]);
    }

    #[test]
    fn test_no_matches_and_empty_catalog() {
        let catalog = sample_catalog();
        let filter = FilterState {
            search: "zebra".to_string(),
            ..FilterState::default()
        };
        assert!(apply(&catalog, &filter).is_empty());
        assert!(apply(&Catalog::default(), &FilterState::default()).is_empty());
    }
}
