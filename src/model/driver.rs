use serde::{Deserialize, Serialize};

use super::license::LicenseType;
use super::resource::{Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub license_type: LicenseType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub license_type: LicenseType,
}

impl Resource for Driver {
    type Draft = NewDriver;

    const KIND: ResourceKind = ResourceKind::Driver;

    fn id(&self) -> &str {
        &self.id
    }
}
