//! Marquee - a terminal-based film catalogue browser.
//!
//! Marquee loads a static collection of film records once at startup and lets
//! the user filter (free-text search, year, country), sort, and page through
//! them, rendering the current page as a grid of cards.
//!
//! # Features
//!
//! - One-shot dataset loading from a URL or a local JSON file
//! - Free-text search over titles and directors
//! - Year and country filters derived from the collection itself
//! - Six stable sort orders
//! - Fixed-size paging with boundary-safe navigation
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use marquee::data::DataLoader;
//! use marquee::query::{self, Criteria};
//!
//! // Load a dataset and run the default query
//! let films = DataLoader::load("films.json")?;
//! let results = query::apply(&films, &Criteria::default());
//! println!("{} films match", results.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod query;
pub mod ui;

pub use error::{MarqueeError, Result};
