use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::license::LicenseType;
use super::resource::{Resource, ResourceKind};

/// A driver bound to a truck for one calendar day.
///
/// `driver_name`, `truck_plate` and `driver_license_type` are filled in by
/// the service on read and are never sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub driver_id: String,
    pub truck_id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing)]
    pub driver_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub truck_plate: Option<String>,
    #[serde(default, skip_serializing)]
    pub driver_license_type: Option<LicenseType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub driver_id: String,
    pub truck_id: String,
    pub date: NaiveDate,
}

impl Assignment {
    pub fn driver_display(&self) -> &str {
        self.driver_name.as_deref().unwrap_or(&self.driver_id)
    }

    pub fn truck_display(&self) -> &str {
        self.truck_plate.as_deref().unwrap_or(&self.truck_id)
    }
}

impl Resource for Assignment {
    type Draft = NewAssignment;

    const KIND: ResourceKind = ResourceKind::Assignment;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_enriched_record() {
        let json = r#"{
            "id": "a1",
            "driver_id": "d1",
            "driver_name": "Jane Doe",
            "driver_license_type": "C",
            "truck_id": "t1",
            "truck_plate": "ABC-1234",
            "date": "2024-06-01"
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(a.driver_display(), "Jane Doe");
        assert_eq!(a.truck_display(), "ABC-1234");
    }

    #[test]
    fn display_falls_back_to_ids() {
        let json = r#"{"id": "a1", "driver_id": "d1", "truck_id": "t1", "date": "2024-06-01"}"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.driver_display(), "d1");
        assert_eq!(a.truck_display(), "t1");
    }

    #[test]
    fn rejects_malformed_date() {
        let json = r#"{"id": "a1", "driver_id": "d1", "truck_id": "t1", "date": "06/01/2024"}"#;
        assert!(serde_json::from_str::<Assignment>(json).is_err());
    }

    #[test]
    fn serialization_skips_display_fields() {
        let a = Assignment {
            id: "a1".into(),
            driver_id: "d1".into(),
            truck_id: "t1".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            driver_name: Some("Jane".into()),
            truck_plate: Some("XYZ".into()),
            driver_license_type: None,
        };
        let value = serde_json::to_value(&a).unwrap();
        assert!(value.get("driver_name").is_none());
        assert_eq!(value["date"], "2024-06-01");
    }
}
