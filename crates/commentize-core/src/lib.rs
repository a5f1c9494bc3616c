pub mod config;
pub mod logging;

pub mod annotate;
pub mod document;
pub mod lookup;
pub mod retry;
