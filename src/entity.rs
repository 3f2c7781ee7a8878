use std::fmt;

use crate::{color::Color, location::LocationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A colored occupant of a location.
///
/// The location is only referenced by id. Moving an entity means removing it
/// from one location and adding it to another; the id is stamped on add.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    name: String,
    location_id: Option<LocationId>,
    color: Color,
}

impl Entity {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: EntityId(rand::random()),
            name: name.into(),
            location_id: None,
            color,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_id(&self) -> Option<LocationId> {
        self.location_id
    }

    pub fn set_location_id(&mut self, location_id: Option<LocationId>) {
        self.location_id = location_id;
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_is_unplaced() {
        let entity = Entity::new("walker", Color::RED);
        assert_eq!(entity.location_id(), None);
        assert_eq!(entity.color(), Color::RED);
        assert_eq!(entity.name(), "walker");
    }

    #[test]
    fn ids_are_distinct() {
        let a = Entity::new("a", Color::RED);
        let b = Entity::new("b", Color::RED);
        assert_ne!(a.id(), b.id());
    }
}
