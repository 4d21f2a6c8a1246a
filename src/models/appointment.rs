//! Appointment model as stored in the `appointments` collection.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an appointment. Cancellation is the only transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

/// A booked in-person appointment at a service center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    /// Display name of the requested service
    pub service: String,
    /// Display name of the service center
    pub location: String,
    /// Locale-formatted date string, kept for display only
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: String,
}

impl Appointment {
    /// Build a freshly confirmed appointment with a new unique id.
    pub fn confirmed(
        service: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_appointment_id(),
            service: service.into(),
            location: location.into(),
            date: date.into(),
            time: time.into(),
            status: AppointmentStatus::Confirmed,
            created_at: iso_timestamp(created_at),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }
}

/// Generate an appointment id of the form `apt-<uuid>`.
pub fn new_appointment_id() -> String {
    format!("apt-{}", uuid::Uuid::new_v4())
}

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_confirmed_appointment_json_layout() {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        let apt = Appointment::confirmed(
            "Police Clearance Certificate",
            "Al Rayyan Service Center",
            "10/19/2026",
            "9:00 AM",
            at,
        );

        assert!(apt.id.starts_with("apt-"));
        assert!(!apt.is_cancelled());

        let json = serde_json::to_value(&apt).unwrap();
        assert_eq!(json["status"], apt.status.as_str());
        assert_eq!(AppointmentStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(json["createdAt"], "2026-10-16T08:30:00.000Z");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_appointment_id();
        let b = new_appointment_id();
        assert_ne!(a, b);
    }
}
