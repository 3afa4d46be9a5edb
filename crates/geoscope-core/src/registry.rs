//! Structure registry for managing registered structures.

use std::collections::HashMap;

use crate::error::{GeoscopeError, Result};
use crate::structure::Structure;

/// Registry for managing all structures in the scene.
///
/// Structures are organized by type name and then by instance name.
#[derive(Default)]
pub struct Registry {
    /// Map from type name -> (instance name -> structure)
    structures: HashMap<String, HashMap<String, Box<dyn Structure>>>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structure with the registry.
    ///
    /// Returns an error if a structure with the same type and name already exists.
    pub fn register(&mut self, structure: Box<dyn Structure>) -> Result<()> {
        let type_name = structure.type_name().to_string();
        let name = structure.name().to_string();

        let type_map = self.structures.entry(type_name).or_default();

        if type_map.contains_key(&name) {
            return Err(GeoscopeError::StructureExists(name));
        }

        log::debug!("registered {} '{}'", structure.type_name(), name);
        type_map.insert(name, structure);
        Ok(())
    }

    /// Gets a reference to a structure by type and name.
    pub fn get(&self, type_name: &str, name: &str) -> Option<&dyn Structure> {
        self.structures
            .get(type_name)
            .and_then(|m| m.get(name))
            .map(|s| s.as_ref())
    }

    /// Gets a structure by type and name, downcast to its concrete type.
    pub fn get_as<T: Structure>(&self, type_name: &str, name: &str) -> Option<&T> {
        self.get(type_name, name)?.as_any().downcast_ref::<T>()
    }

    /// Gets a mutable structure by type and name, downcast to its concrete type.
    pub fn get_as_mut<T: Structure>(&mut self, type_name: &str, name: &str) -> Option<&mut T> {
        self.structures
            .get_mut(type_name)?
            .get_mut(name)?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Checks if a structure with the given type and name exists.
    pub fn contains(&self, type_name: &str, name: &str) -> bool {
        self.structures
            .get(type_name)
            .is_some_and(|m| m.contains_key(name))
    }

    /// Removes every structure called `name`, whatever its type.
    ///
    /// Returns the number of structures removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        self.structures
            .values_mut()
            .filter_map(|m| m.remove(name))
            .count()
    }

    /// Removes all structures from the registry.
    pub fn clear(&mut self) {
        self.structures.clear();
    }

    /// Returns an iterator over all structures.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Structure> {
        self.structures
            .values()
            .flat_map(|m| m.values())
            .map(|s| s.as_ref())
    }

    /// Returns the total number of registered structures.
    pub fn len(&self) -> usize {
        self.structures.values().map(HashMap::len).sum()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.structures.values().all(HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use glam::DVec3;

    use super::*;
    use crate::draw::{DrawList, Label, LabelStyle};

    struct Marker {
        name: String,
        at: DVec3,
        enabled: bool,
    }

    impl Marker {
        fn boxed(name: &str, at: DVec3) -> Box<dyn Structure> {
            Box::new(Self {
                name: name.to_string(),
                at,
                enabled: true,
            })
        }
    }

    impl Structure for Marker {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn type_name(&self) -> &'static str {
            "Marker"
        }
        fn is_enabled(&self) -> bool {
            self.enabled
        }
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
        fn draw(&self, out: &mut DrawList) {
            out.labels
                .push(Label::new(self.at, self.name.clone(), LabelStyle::default()));
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register(Marker::boxed("a", DVec3::ZERO)).unwrap();
        registry.register(Marker::boxed("b", DVec3::ONE)).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("Marker", "a"));
        assert!(!registry.contains("Plane", "a"));
        assert_eq!(registry.get("Marker", "b").map(|s| s.name()), Some("b"));
        assert_eq!(
            registry.get_as::<Marker>("Marker", "b").map(|m| m.at),
            Some(DVec3::ONE)
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = Registry::new();
        registry.register(Marker::boxed("a", DVec3::ZERO)).unwrap();
        let err = registry.register(Marker::boxed("a", DVec3::ONE)).unwrap_err();
        assert!(matches!(err, GeoscopeError::StructureExists(name) if name == "a"));
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::new();
        registry.register(Marker::boxed("a", DVec3::ZERO)).unwrap();
        registry.register(Marker::boxed("b", DVec3::ZERO)).unwrap();

        assert_eq!(registry.remove_named("a"), 1);
        assert_eq!(registry.remove_named("a"), 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.remove_named("b"), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_as_mut_and_bounding_box() {
        let mut registry = Registry::new();
        registry.register(Marker::boxed("a", DVec3::ZERO)).unwrap();
        registry.get_as_mut::<Marker>("Marker", "a").unwrap().at = DVec3::new(1.0, 2.0, 3.0);

        let bb = registry.get("Marker", "a").unwrap().bounding_box().unwrap();
        assert_eq!(bb.min, DVec3::new(1.0, 2.0, 3.0));
        assert!(registry.get_as_mut::<Marker>("Plane", "a").is_none());
    }
}
