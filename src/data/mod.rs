//! Film data loading and representation.
//!
//! This module handles loading the film dataset and deriving the distinct
//! filter choices offered by the controls bar.

mod film;
mod loader;
mod options;

pub use film::Film;
pub use loader::DataLoader;
pub use options::FilterOptions;
