//! Service and service center reference data.

use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// How a service is delivered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceType {
    /// Completed fully online
    Digital,
    /// Requires an in-person visit to a service center
    IncompleteDigital,
}

/// A government service offered by an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Ministry or department offering the service
    pub entity: LocalizedText,
    pub cost: u32,
    pub currency: String,
    pub estimated_time: LocalizedText,
    pub category: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_center_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_center_ids: Option<Vec<String>>,
}

impl Service {
    pub fn is_incomplete_digital(&self) -> bool {
        self.service_type == ServiceType::IncompleteDigital
    }

    /// All center ids this service is linked to, single or many.
    pub fn center_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        if let Some(id) = &self.service_center_id {
            ids.push(id);
        }
        if let Some(many) = &self.service_center_ids {
            for id in many {
                if !ids.contains(&id.as_str()) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    pub fn is_offered_at(&self, center_id: &str) -> bool {
        self.service_center_id.as_deref() == Some(center_id)
            || self
                .service_center_ids
                .as_ref()
                .is_some_and(|ids| ids.iter().any(|id| id == center_id))
    }
}

/// A physical location where incomplete digital services are finished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenter {
    pub id: String,
    pub name: LocalizedText,
    pub address: LocalizedText,
    pub working_hours: LocalizedText,
}
