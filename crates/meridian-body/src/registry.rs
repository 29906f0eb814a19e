//! Body registry — lookup for all celestial bodies known to the overlay system.

use std::collections::HashMap;

use crate::BodyDef;

/// Errors that can occur when registering bodies.
#[derive(Debug, thiserror::Error)]
pub enum BodyRegistryError {
    /// A body with this name is already registered.
    #[error("duplicate body name: {0}")]
    DuplicateName(String),
}

/// Registry of all celestial bodies, indexed by name.
pub struct BodyRegistry {
    bodies: Vec<BodyDef>,
    name_index: HashMap<String, usize>,
}

impl BodyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            name_index: HashMap::new(),
        }
    }

    /// Register a new body. Returns the body's index on success.
    ///
    /// # Errors
    ///
    /// Returns [`BodyRegistryError::DuplicateName`] if a body with the same
    /// name already exists.
    pub fn register(&mut self, body: BodyDef) -> Result<usize, BodyRegistryError> {
        if self.name_index.contains_key(&body.name) {
            return Err(BodyRegistryError::DuplicateName(body.name.clone()));
        }
        let idx = self.bodies.len();
        self.name_index.insert(body.name.clone(), idx);
        self.bodies.push(body);
        Ok(idx)
    }

    /// Look up a body by name.
    pub fn get_by_name(&self, name: &str) -> Option<&BodyDef> {
        self.name_index.get(name).map(|&idx| &self.bodies[idx])
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all registered bodies.
    pub fn iter(&self) -> impl Iterator<Item = &BodyDef> {
        self.bodies.iter()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
