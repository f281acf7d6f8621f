//! Photo-gallery screen core: thumbnail grid with multi-select, and a
//! full-screen viewer with pinch, drag and double-tap zoom.
//!
//! Everything here is plain state plus pure reducers; drawing and decoding
//! are left to the host UI.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod scanner;
pub mod selection;
pub mod thumbnails;
pub mod ui;
pub mod viewer;

pub use app::{GalleryEvent, GallerySession};
pub use error::{GalleryError, Result};
