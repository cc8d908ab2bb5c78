//! # Subsphere Core
//!
//! Core crate for Subsphere: CPU-side sphere meshes built by recursive
//! triangle subdivision, plus the flat vertex/index data the rendering
//! front end uploads to the GPU.

pub mod math;
pub mod mesh;
pub mod sphere;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version at startup.
pub fn init() {
    log::info!("Subsphere Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
