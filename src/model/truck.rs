use serde::{Deserialize, Serialize};

use super::license::LicenseType;
use super::resource::{Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    pub plate: String,
    /// Minimum license a driver must hold to operate this truck.
    pub min_license_type: LicenseType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTruck {
    pub plate: String,
    pub min_license_type: LicenseType,
}

impl Resource for Truck {
    type Draft = NewTruck;

    const KIND: ResourceKind = ResourceKind::Truck;

    fn id(&self) -> &str {
        &self.id
    }
}
