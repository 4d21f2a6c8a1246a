//! Notification model as stored in the `notifications` collection.

use serde::{Deserialize, Serialize};

/// What a notification is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Appointment,
    Service,
    Survey,
    Poll,
    Policy,
    Forum,
    Other,
}

/// Tab a notification is listed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Participation,
    Services,
    Policy,
}

/// A user-facing notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub description: String,
    /// Relative time text captured at creation ("Just now"); never recomputed
    pub time: String,
    #[serde(default)]
    pub read: bool,
    pub category: NotificationCategory,
    /// Weak reference to the appointment this notification is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
}

impl Notification {
    /// Generate a notification id that is not tied to an appointment.
    pub fn new_id() -> String {
        format!("notif-{}", uuid::Uuid::new_v4())
    }

    /// Id of the notification derived from an appointment.
    pub fn id_for_appointment(appointment_id: &str) -> String {
        format!("notif-{}", appointment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "n1",
            "type": "survey",
            "title": "New survey",
            "description": "Tell us about public transport",
            "time": "2 hours ago",
            "category": "participation"
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.kind, NotificationType::Survey);
        assert!(!notification.read);
        assert!(notification.appointment_id.is_none());

        let back = serde_json::to_value(&notification).unwrap();
        assert!(back.get("appointmentId").is_none());
        assert_eq!(back["type"], "survey");
    }
}
