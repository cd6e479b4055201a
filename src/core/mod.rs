// LogSift - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform or app. File contents arrive as &str; results
// leave as values or rendered text.

pub mod discovery;
pub mod export;
pub mod fields;
pub mod keyword;
pub mod model;
pub mod playback;
pub mod scanner;
pub mod splitter;
pub mod time_window;
