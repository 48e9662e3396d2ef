/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The loaded image catalog (catalog.rs)
/// - The filter/sort pipeline (pipeline.rs)
/// - Result statistics (stats.rs)
/// - The owned application state and interaction dispatch (gallery.rs)

pub mod catalog;
pub mod data;
pub mod gallery;
pub mod pipeline;
pub mod stats;
