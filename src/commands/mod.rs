//! CLI commands for bookbits

pub mod books;
pub mod dispatch;
pub mod export;
pub mod menu;
pub mod picker;
pub mod stores;
