//! ISS Flyover Library
//!
//! Finds the next International Space Station passes over the caller's
//! current location by chaining three web lookups: public IP, geolocation
//! of that IP, and pass prediction for the resulting coordinates.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::FlyoverService;
pub use bootstrap::{build_flyover_service, build_with_transport};
pub use config::{load_config, Config};
pub use domain::entities::{Coordinates, PassList, PassRecord};
pub use domain::error::{ErrorKind, FlyoverError, Stage, TransportError, TransportErrorKind};
pub use domain::ports::{GeoResolver, HttpResponse, HttpTransport, IpResolver, PassPredictor};
pub use domain::value_objects::{CoordinateValue, IpAddress};
