use rand::Rng;

use crate::{
    entity::Entity,
    error::{Error, Result},
    location::{Location, LocationId},
};

/// Square matrix of locations, stored row-major so that a location's id is
/// also its index. The shape is fixed at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    locations: Vec<Location>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        let mut locations = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                locations.push(Location::new(x, y, LocationId(y * size + x)));
            }
        }
        Self { size, locations }
    }

    pub fn rows(&self) -> usize {
        self.size
    }

    pub fn columns(&self) -> usize {
        self.size
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.locations.get(id.0).ok_or(Error::NotFound(id))
    }

    pub fn location_mut(&mut self, id: LocationId) -> Result<&mut Location> {
        self.locations.get_mut(id.0).ok_or(Error::NotFound(id))
    }

    pub fn location_by_coordinates(&self, x: usize, y: usize) -> Result<&Location> {
        if x >= self.size || y >= self.size {
            return Err(Error::CoordinatesOutOfBounds { x, y });
        }
        self.location(LocationId(y * self.size + x))
    }

    pub fn first_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn random_location<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Location> {
        if self.locations.is_empty() {
            return None;
        }
        Some(&self.locations[rng.gen_range(0..self.locations.len())])
    }

    // Neighbours stop at the border, there is no wrap-around.

    pub fn up(&self, location: &Location) -> Option<&Location> {
        let y = location.y().checked_sub(1)?;
        self.location_by_coordinates(location.x(), y).ok()
    }

    pub fn down(&self, location: &Location) -> Option<&Location> {
        self.location_by_coordinates(location.x(), location.y() + 1)
            .ok()
    }

    pub fn left(&self, location: &Location) -> Option<&Location> {
        let x = location.x().checked_sub(1)?;
        self.location_by_coordinates(x, location.y()).ok()
    }

    pub fn right(&self, location: &Location) -> Option<&Location> {
        self.location_by_coordinates(location.x() + 1, location.y())
            .ok()
    }

    /// Places the entity in a uniformly chosen location and returns its id.
    pub fn add_entity<R: Rng + ?Sized>(&mut self, entity: Entity, rng: &mut R) -> Result<LocationId> {
        let id = match self.random_location(rng) {
            Some(location) => location.id(),
            None => return Err(Error::NotFound(LocationId(0))),
        };
        self.add_entity_to_location(entity, id)?;
        Ok(id)
    }

    pub fn add_entity_to_location(&mut self, entity: Entity, id: LocationId) -> Result<()> {
        self.location_mut(id)?.add_entity(entity);
        Ok(())
    }

    /// Looks the entity up through its location id and takes it out.
    pub fn remove_entity(&mut self, entity: &Entity) -> Result<Entity> {
        let id = entity.location_id().ok_or(Error::NotPresent(entity.id()))?;
        self.location_mut(id)?.remove_entity(entity.id())
    }

    pub fn entity_count(&self) -> usize {
        self.locations.iter().map(Location::num_entities).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::color::Color;

    #[test]
    fn covers_every_coordinate_once() {
        for size in 1..=7 {
            let grid = Grid::new(size);
            let coords: HashSet<(usize, usize)> =
                grid.locations().map(|l| (l.x(), l.y())).collect();
            assert_eq!(grid.num_locations(), size * size);
            assert_eq!(coords.len(), size * size);
            assert!(coords.iter().all(|&(x, y)| x < size && y < size));
            assert_eq!(grid.rows(), size);
            assert_eq!(grid.columns(), size);
        }
    }

    #[test]
    fn enumeration_is_row_major() {
        let grid = Grid::new(3);
        let order: Vec<(usize, usize)> = grid.locations().map(|l| (l.x(), l.y())).collect();
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[1], (1, 0));
        assert_eq!(order[3], (0, 1));
        assert_eq!(order[8], (2, 2));
    }

    #[test]
    fn location_lookup_out_of_range() {
        let grid = Grid::new(4);
        assert_eq!(grid.location(LocationId(15)).unwrap().id(), LocationId(15));
        assert_eq!(
            grid.location(LocationId(16)).unwrap_err(),
            Error::NotFound(LocationId(16))
        );
        assert_eq!(
            grid.location_by_coordinates(4, 0).unwrap_err(),
            Error::CoordinatesOutOfBounds { x: 4, y: 0 }
        );
    }

    #[test]
    fn neighbours_stop_at_border() {
        let grid = Grid::new(3);
        let corner = grid.first_location().unwrap();
        assert!(grid.up(corner).is_none());
        assert!(grid.left(corner).is_none());
        assert_eq!(grid.right(corner).map(|l| (l.x(), l.y())), Some((1, 0)));
        assert_eq!(grid.down(corner).map(|l| (l.x(), l.y())), Some((0, 1)));

        let far = grid.location_by_coordinates(2, 2).unwrap();
        assert!(grid.down(far).is_none());
        assert!(grid.right(far).is_none());
    }

    #[test]
    fn add_and_remove_through_location_id() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(5);
        let entity = Entity::new("e", Color::RED);
        let id = entity.id();

        let location_id = grid.add_entity(entity, &mut rng).unwrap();
        assert_eq!(grid.entity_count(), 1);
        let placed = grid.location(location_id).unwrap().entities()[0].clone();
        assert_eq!(placed.location_id(), Some(location_id));

        let removed = grid.remove_entity(&placed).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(grid.entity_count(), 0);
        assert_eq!(grid.remove_entity(&removed), Err(Error::NotPresent(id)));
    }
}
