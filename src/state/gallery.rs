use super::catalog::Catalog;
use super::data::{FilterState, ImageRecord, SortOrder};
use super::pipeline::{self, ResultSet};
use super::stats::Stats;
use crate::error::LoadError;

/// Progress of the one-time document load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(LoadError),
}

/// Every user interaction the gallery reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Category dropdown changed (None = all categories)
    CategorySelected(Option<String>),
    /// Search field edited; fires on every keystroke
    SearchEdited(String),
    /// Filter form submitted
    Submitted,
    /// One of the sort buttons pressed
    SortChosen(SortOrder),
    /// Card clicked, carrying the record's catalog position
    CardClicked(usize),
    /// Close button or backdrop clicked
    DetailClosed,
}

/// Whole-application state
///
/// Owns the catalog, the current filter (including the sticky sort
/// order), the derived result set and the detail selection.
#[derive(Debug)]
pub struct GalleryState {
    catalog: Catalog,
    filter: FilterState,
    /// None until the first recompute
    results: Option<ResultSet>,
    stats: Stats,
    selected: Option<usize>,
    status: LoadStatus,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            filter: FilterState::default(),
            results: None,
            stats: Stats::default(),
            selected: None,
            status: LoadStatus::Loading,
        }
    }

    /// Install the loaded catalog and run the initial filter pass
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.status = LoadStatus::Ready;
        self.recompute();
    }

    /// Record a load failure. The catalog stays empty and nothing is
    /// recomputed until the user interacts.
    pub fn fail(&mut self, error: LoadError) {
        self.status = LoadStatus::Failed(error);
    }

    /// Apply an interaction
    ///
    /// Returns true when the result set was recomputed.
    pub fn dispatch(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::CategorySelected(category) => {
                self.filter.category = category;
                self.recompute();
                true
            }
            Interaction::SearchEdited(search) => {
                self.filter.search = search;
                self.recompute();
                true
            }
            Interaction::Submitted => {
                self.recompute();
                true
            }
            Interaction::SortChosen(order) => {
                self.filter.sort = Some(order);
                self.recompute();
                true
            }
            Interaction::CardClicked(index) => {
                if self.catalog.get(index).is_some() {
                    self.selected = Some(index);
                }
                false
            }
            Interaction::DetailClosed => {
                self.selected = None;
                false
            }
        }
    }

    /// Rebuild the result set and stats from scratch
    fn recompute(&mut self) {
        let results = pipeline::apply(&self.catalog, &self.filter);
        self.stats = Stats::from_records(results.records(&self.catalog).map(|(_, record)| record));

        tracing::debug!(
            "🔍 Recomputed gallery: {} of {} images, sort {:?}",
            results.len(),
            self.catalog.len(),
            self.filter.sort
        );

        self.results = Some(results);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Record shown in the detail overlay, if it is open
    pub fn selected(&self) -> Option<(usize, &ImageRecord)> {
        let index = self.selected?;
        self.catalog.get(index).map(|record| (index, record))
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}
