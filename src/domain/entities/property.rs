//! Property definitions, schemas and entity types
//!
//! A `Schema` is a named, ordered list of property definitions. An
//! `EntityType` is the property set a kind of entity carries once all of
//! its schemas have been applied.

use serde::Serialize;

/// A single property definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDefinition {
    pub name: String,
    /// RDF predicate the property is stored under
    pub predicate: String,
    /// Whether the property accepts more than one value
    pub multiple: bool,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: predicate.into(),
            multiple: true,
        }
    }

    /// Restrict the property to a single value
    pub fn single(mut self) -> Self {
        self.multiple = false;
        self
    }
}

/// Named, ordered set of property definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    name: String,
    properties: Vec<PropertyDefinition>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, definition: PropertyDefinition) -> Self {
        self.properties.push(definition);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }
}

/// The property set of a type of entity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EntityType {
    name: String,
    properties: Vec<PropertyDefinition>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub(crate) fn define(&mut self, definition: PropertyDefinition) {
        self.properties.push(definition);
    }
}
