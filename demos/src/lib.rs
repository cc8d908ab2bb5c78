//! # Subsphere Demos
//!
//! Demo programs driving the Subsphere mesh engine. Each binary is a
//! self-contained entry point with no state shared between them.
//!
//! ## Available Demos
//!
//! - `sphere_demo` - Walks subdivision levels up and down on a tetrahedron seed
//! - `shapes_demo` - Generates the 2D rectangle grid and circle streams

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging for a demo binary, defaulting to `info`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
