//! Typed fleet records as exchanged with the REST service.
//!
//! Records only enter the client through serde decoding of a service
//! response, so a payload missing a required field never reaches the store.

mod assignment;
mod driver;
mod license;
mod resource;
mod truck;

pub use assignment::{Assignment, NewAssignment};
pub use driver::{Driver, NewDriver};
pub use license::{LicenseType, ParseLicenseError};
pub use resource::{Resource, ResourceKind};
pub use truck::{NewTruck, Truck};
