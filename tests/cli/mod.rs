mod books;
mod config;
mod export;
mod stores;
