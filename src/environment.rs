use rand::Rng;

use crate::{
    entity::Entity,
    error::Result,
    grid::Grid,
    location::LocationId,
};

/// The world: a named grid. Restarting replaces the whole environment.
#[derive(Debug, Clone)]
pub struct Environment {
    name: String,
    grid: Grid,
}

impl Environment {
    pub fn new(name: impl Into<String>, grid_size: usize) -> Self {
        Self {
            name: name.into(),
            grid: Grid::new(grid_size),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn add_entity<R: Rng + ?Sized>(&mut self, entity: Entity, rng: &mut R) -> Result<LocationId> {
        self.grid.add_entity(entity, rng)
    }

    pub fn add_entity_to_location(&mut self, entity: Entity, id: LocationId) -> Result<()> {
        self.grid.add_entity_to_location(entity, id)
    }

    pub fn remove_entity(&mut self, entity: &Entity) -> Result<Entity> {
        self.grid.remove_entity(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn starts_empty() {
        let environment = Environment::new("environment", 6);
        assert_eq!(environment.name(), "environment");
        assert_eq!(environment.grid().num_locations(), 36);
        assert_eq!(environment.grid().entity_count(), 0);
    }

    #[test]
    fn places_entity_in_requested_location() {
        let mut environment = Environment::new("environment", 3);
        environment
            .add_entity_to_location(Entity::new("e", Color::BLUE), LocationId(4))
            .unwrap();
        let location = environment.grid().location_by_coordinates(1, 1).unwrap();
        assert_eq!(location.num_entities(), 1);
        assert!(environment
            .add_entity_to_location(Entity::new("lost", Color::BLUE), LocationId(9))
            .is_err());
    }
}
