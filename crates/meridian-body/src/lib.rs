//! Celestial body model: immutable body definitions and a name-indexed registry.

mod body_def;
mod registry;

pub use body_def::BodyDef;
pub use registry::{BodyRegistry, BodyRegistryError};
