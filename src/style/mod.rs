//! Style registration and resolution.

mod registry;

pub use registry::StyleRegistry;
