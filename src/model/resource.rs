use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Driver,
    Truck,
    Assignment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Driver,
        ResourceKind::Truck,
        ResourceKind::Assignment,
    ];

    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Driver => "drivers",
            ResourceKind::Truck => "trucks",
            ResourceKind::Assignment => "assignments",
        }
    }

    /// Capitalised singular label, e.g. "Driver".
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Driver => "Driver",
            ResourceKind::Truck => "Truck",
            ResourceKind::Assignment => "Assignment",
        }
    }

    pub fn plural(self) -> &'static str {
        self.path()
    }

    /// Capitalised plural, used as a screen title.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Driver => "Drivers",
            ResourceKind::Truck => "Trucks",
            ResourceKind::Assignment => "Assignments",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A server-owned record with a create payload.
pub trait Resource:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Create payload (the record without its server-assigned id).
    type Draft: Clone + fmt::Debug + Serialize + Send + Sync + 'static;

    const KIND: ResourceKind;

    fn id(&self) -> &str;
}
