use std::fmt;

use crate::{
    entity::{Entity, EntityId},
    error::{Error, Result},
};

/// Flattened row-major index into the grid: `y * size + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Location {
    x: usize,
    y: usize,
    id: LocationId,
    // Insertion order; the last one is drawn on top.
    entities: Vec<Entity>,
}

impl Location {
    pub fn new(x: usize, y: usize, id: LocationId) -> Self {
        Self {
            x,
            y,
            id,
            entities: Vec::new(),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn num_entities(&self) -> usize {
        self.entities.len()
    }

    pub fn top_entity(&self) -> Option<&Entity> {
        self.entities.last()
    }

    pub fn is_entity_present(&self, id: EntityId) -> bool {
        self.entities.iter().any(|entity| entity.id() == id)
    }

    pub fn add_entity(&mut self, mut entity: Entity) {
        entity.set_location_id(Some(self.id));
        self.entities.push(entity);
    }

    /// Removes the entity and hands it back with its location cleared.
    /// Callers are expected to check `is_entity_present` first.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<Entity> {
        let index = self
            .entities
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or(Error::NotPresent(id))?;
        let mut entity = self.entities.remove(index);
        entity.set_location_id(None);
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn add_then_remove_restores_count() {
        let mut location = Location::new(1, 2, LocationId(9));
        location.add_entity(Entity::new("resident", Color::BLUE));
        let before = location.num_entities();

        let entity = Entity::new("visitor", Color::RED);
        let id = entity.id();
        location.add_entity(entity);
        assert!(location.is_entity_present(id));
        assert_eq!(location.entities()[1].location_id(), Some(LocationId(9)));

        let removed = location.remove_entity(id).unwrap();
        assert_eq!(removed.location_id(), None);
        assert!(!location.is_entity_present(id));
        assert_eq!(location.num_entities(), before);
    }

    #[test]
    fn top_entity_is_last_added() {
        let mut location = Location::new(0, 0, LocationId(0));
        assert!(location.top_entity().is_none());

        location.add_entity(Entity::new("a", Color::RED));
        location.add_entity(Entity::new("b", Color::GREEN));
        assert_eq!(location.top_entity().unwrap().color(), Color::GREEN);
    }

    #[test]
    fn removing_absent_entity_fails() {
        let mut location = Location::new(0, 0, LocationId(0));
        let stranger = Entity::new("stranger", Color::RED);
        assert_eq!(
            location.remove_entity(stranger.id()),
            Err(Error::NotPresent(stranger.id()))
        );
    }
}
