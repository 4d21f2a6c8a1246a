//! Navigation events between screens.
//!
//! Each variant carries exactly the payload its destination needs.

use serde::{Deserialize, Serialize};

use super::{Language, ServiceCenter};

/// Payload for opening the booking wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub center_id: String,
    pub center_name: String,
    pub center_address: String,
    /// Service chosen before entering the wizard, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Where "back" from the first step goes
    pub previous_screen: Box<Route>,
}

impl BookingRequest {
    pub fn for_center(center: &ServiceCenter, lang: Language, previous_screen: Route) -> Self {
        Self {
            center_id: center.id.clone(),
            center_name: center.name.get(lang).to_string(),
            center_address: center.address.get(lang).to_string(),
            service_name: None,
            previous_screen: Box::new(previous_screen),
        }
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }
}

/// A navigation target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "screen", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Route {
    Home,
    Services,
    ServiceDetails { service_id: String },
    ServiceCenters { service_id: String },
    BookAppointment(BookingRequest),
    Appointments,
    AppointmentDetails { appointment_id: String },
    Notifications,
    NotificationDetails { notification_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_wire_shape() {
        let route = Route::BookAppointment(BookingRequest {
            center_id: "sc-rayyan".to_string(),
            center_name: "Al Rayyan Service Center".to_string(),
            center_address: "Al Rayyan Road".to_string(),
            service_name: Some("Police Clearance Certificate".to_string()),
            previous_screen: Box::new(Route::ServiceCenters {
                service_id: "police-clearance".to_string(),
            }),
        });

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["screen"], "bookAppointment");
        assert_eq!(json["centerId"], "sc-rayyan");
        assert_eq!(json["previousScreen"]["screen"], "serviceCenters");
        assert_eq!(json["previousScreen"]["serviceId"], "police-clearance");

        let back: Route = serde_json::from_value(json).unwrap();
        assert_eq!(back, route);
    }
}
