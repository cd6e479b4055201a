// LogSift - lib.rs
//
// Library entry point. Every tool is usable programmatically through the
// `app` drivers (or the pure `core` functions); `main.rs` is a thin CLI.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
