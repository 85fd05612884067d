//! Bookbits Core Library
//!
//! Reads the Apple Books library and annotation stores and exports the
//! highlights of one book to CSV or Markdown.

pub mod annotations;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod library;
pub mod locate;
pub mod logging;
pub mod selection;
