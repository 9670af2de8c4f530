//! Domain layer: entities, value objects, errors and outbound ports.

pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Coordinates, PassList, PassRecord};
pub use error::{ErrorKind, FlyoverError, Stage, TransportError, TransportErrorKind};
pub use value_objects::{CoordinateValue, IpAddress};
