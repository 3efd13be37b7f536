pub mod caption;
pub mod compose;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod pipeline;
pub mod platform;
