use thiserror::Error;

use crate::{entity::EntityId, location::LocationId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no location with id {0}")]
    NotFound(LocationId),
    #[error("coordinates ({x}, {y}) are outside the grid")]
    CoordinatesOutOfBounds { x: usize, y: usize },
    #[error("entity {0} is not present in this location")]
    NotPresent(EntityId),
    #[error("display error: {0}")]
    Display(String),
}
