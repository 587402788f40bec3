pub mod config;
pub mod engine;
pub mod logging;
pub mod quotes;
pub mod relay;
pub mod shutdown;
pub mod ui;
