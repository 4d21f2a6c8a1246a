//! Repositories for the appointment and notification collections.
//!
//! Every mutation is a read-modify-write of the whole collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Storage, APPOINTMENTS_KEY, NOTIFICATIONS_KEY};
use crate::errors::AppError;
use crate::models::{
    Appointment, AppointmentStatus, Language, Notification, NotificationCategory,
    NotificationType,
};

/// Most notifications kept; older entries are dropped on insert.
pub const MAX_NOTIFICATIONS: usize = 50;

async fn load_collection<S: Storage, T: DeserializeOwned>(
    storage: &S,
    key: &str,
) -> Result<Vec<T>, AppError> {
    match storage.get(key).await? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

async fn store_collection<S: Storage, T: Serialize>(
    storage: &S,
    key: &str,
    items: &[T],
) -> Result<(), AppError> {
    let raw = serde_json::to_string(items)?;
    storage.set(key, raw).await
}

// ==================== APPOINTMENTS ====================

/// Repository for booked appointments.
#[derive(Clone)]
pub struct AppointmentRepository<S: Storage> {
    storage: S,
    seed_demo_data: bool,
}

impl<S: Storage> AppointmentRepository<S> {
    /// `seed_demo_data` makes an empty collection come back with one sample record.
    pub fn new(storage: S, seed_demo_data: bool) -> Self {
        Self {
            storage,
            seed_demo_data,
        }
    }

    /// Prepend an appointment. No dedup and no validation.
    pub async fn save_appointment(&self, appointment: &Appointment) -> Result<(), AppError> {
        let mut appointments: Vec<Appointment> =
            load_collection(&self.storage, APPOINTMENTS_KEY).await?;
        appointments.insert(0, appointment.clone());
        store_collection(&self.storage, APPOINTMENTS_KEY, &appointments).await?;

        tracing::info!(
            appointment_id = %appointment.id,
            total = appointments.len(),
            "Appointment saved"
        );
        Ok(())
    }

    /// Overwrite the record that has `appointment.id`, keeping its position.
    /// Returns false when no record has that id.
    pub async fn replace_appointment(&self, appointment: &Appointment) -> Result<bool, AppError> {
        let mut appointments: Vec<Appointment> =
            load_collection(&self.storage, APPOINTMENTS_KEY).await?;

        let Some(existing) = appointments.iter_mut().find(|a| a.id == appointment.id) else {
            return Ok(false);
        };
        *existing = appointment.clone();

        store_collection(&self.storage, APPOINTMENTS_KEY, &appointments).await?;
        tracing::info!(appointment_id = %appointment.id, "Appointment updated");
        Ok(true)
    }

    /// List all appointments, newest first.
    pub async fn get_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        let appointments: Vec<Appointment> =
            load_collection(&self.storage, APPOINTMENTS_KEY).await?;

        if appointments.is_empty() && self.seed_demo_data {
            let seeded = vec![demo_appointment()];
            store_collection(&self.storage, APPOINTMENTS_KEY, &seeded).await?;
            tracing::debug!("Seeded empty appointment collection with demo record");
            return Ok(seeded);
        }

        Ok(appointments)
    }

    /// Get an appointment by ID.
    pub async fn get_appointment_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        Ok(self
            .get_appointments()
            .await?
            .into_iter()
            .find(|a| a.id == id))
    }

    /// Mark an appointment cancelled. Returns false when no record has `id`.
    pub async fn cancel_appointment(&self, id: &str) -> Result<bool, AppError> {
        let mut appointments = self.get_appointments().await?;

        let mut found = false;
        for appointment in appointments.iter_mut().filter(|a| a.id == id) {
            appointment.status = AppointmentStatus::Cancelled;
            found = true;
        }

        if !found {
            tracing::debug!(appointment_id = %id, "Cancel requested for unknown appointment");
            return Ok(false);
        }

        store_collection(&self.storage, APPOINTMENTS_KEY, &appointments).await?;
        tracing::info!(appointment_id = %id, "Appointment cancelled");
        Ok(true)
    }

    /// Drop the whole collection.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.storage.remove(APPOINTMENTS_KEY).await
    }
}

fn demo_appointment() -> Appointment {
    Appointment {
        id: "apt-demo-001".to_string(),
        service: "Residence Permit Renewal".to_string(),
        location: "Al Rayyan Service Center".to_string(),
        date: "1/18/2026".to_string(),
        time: "10:30 AM".to_string(),
        status: AppointmentStatus::Confirmed,
        created_at: "2026-01-05T09:00:00.000Z".to_string(),
    }
}

// ==================== NOTIFICATIONS ====================

/// Repository for user notifications, capped at [`MAX_NOTIFICATIONS`].
#[derive(Clone)]
pub struct NotificationRepository<S: Storage> {
    storage: S,
}

impl<S: Storage> NotificationRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// List all notifications, newest first.
    pub async fn get_notifications(&self) -> Result<Vec<Notification>, AppError> {
        load_collection(&self.storage, NOTIFICATIONS_KEY).await
    }

    /// Get a notification by ID.
    pub async fn get_notification_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Notification>, AppError> {
        Ok(self
            .get_notifications()
            .await?
            .into_iter()
            .find(|n| n.id == id))
    }

    /// Prepend a notification, dropping the oldest beyond the cap.
    pub async fn add_notification(&self, notification: Notification) -> Result<(), AppError> {
        let mut notifications = self.get_notifications().await?;
        self.prepend(&mut notifications, notification).await
    }

    /// Mark one notification read. Returns false when no record has `id`.
    pub async fn mark_notification_as_read(&self, id: &str) -> Result<bool, AppError> {
        let mut notifications = self.get_notifications().await?;

        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        notification.read = true;

        store_collection(&self.storage, NOTIFICATIONS_KEY, &notifications).await?;
        Ok(true)
    }

    /// Mark every notification read and return how many changed.
    pub async fn mark_all_as_read(&self) -> Result<usize, AppError> {
        let mut notifications = self.get_notifications().await?;

        let mut changed = 0;
        for notification in notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }

        if changed > 0 {
            store_collection(&self.storage, NOTIFICATIONS_KEY, &notifications).await?;
        }
        Ok(changed)
    }

    pub async fn unread_count(&self) -> Result<usize, AppError> {
        Ok(self
            .get_notifications()
            .await?
            .iter()
            .filter(|n| !n.read)
            .count())
    }

    /// Create and store the confirmation notice for a new appointment,
    /// replacing an earlier notice for the same appointment.
    pub async fn create_appointment_notification(
        &self,
        appointment: &Appointment,
        lang: Language,
    ) -> Result<Notification, AppError> {
        let (title, description) = match lang {
            Language::En => (
                "Appointment Confirmed".to_string(),
                format!(
                    "Your appointment for {} at {} on {} at {} has been confirmed.",
                    appointment.service, appointment.location, appointment.date, appointment.time
                ),
            ),
            Language::Ar => (
                "تم تأكيد الموعد".to_string(),
                format!(
                    "تم تأكيد موعدك لخدمة {} في {} بتاريخ {} الساعة {}.",
                    appointment.service, appointment.location, appointment.date, appointment.time
                ),
            ),
        };

        let notification = Notification {
            id: Notification::id_for_appointment(&appointment.id),
            kind: NotificationType::Appointment,
            title,
            description,
            time: just_now(lang),
            read: false,
            category: NotificationCategory::Services,
            appointment_id: Some(appointment.id.clone()),
        };

        let mut notifications = self.get_notifications().await?;
        notifications.retain(|n| n.id != notification.id);
        self.prepend(&mut notifications, notification.clone()).await?;
        Ok(notification)
    }

    /// Replace every notice about `appointment_id` with one cancellation notice.
    pub async fn cancel_appointment_notification(
        &self,
        appointment_id: &str,
        lang: Language,
    ) -> Result<Notification, AppError> {
        let mut notifications = self.get_notifications().await?;
        let before = notifications.len();
        notifications.retain(|n| n.appointment_id.as_deref() != Some(appointment_id));

        let (title, description) = match lang {
            Language::En => (
                "Appointment Cancelled",
                "Your appointment has been cancelled successfully.",
            ),
            Language::Ar => ("تم إلغاء الموعد", "تم إلغاء موعدك بنجاح."),
        };

        let notification = Notification {
            id: Notification::new_id(),
            kind: NotificationType::Appointment,
            title: title.to_string(),
            description: description.to_string(),
            time: just_now(lang),
            read: false,
            category: NotificationCategory::Services,
            appointment_id: None,
        };

        tracing::debug!(
            appointment_id = %appointment_id,
            removed = before - notifications.len(),
            "Replacing appointment notifications with cancellation notice"
        );

        self.prepend(&mut notifications, notification.clone()).await?;
        Ok(notification)
    }

    /// Drop the whole collection.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.storage.remove(NOTIFICATIONS_KEY).await
    }

    async fn prepend(
        &self,
        notifications: &mut Vec<Notification>,
        notification: Notification,
    ) -> Result<(), AppError> {
        notifications.insert(0, notification);
        notifications.truncate(MAX_NOTIFICATIONS);
        store_collection(&self.storage, NOTIFICATIONS_KEY, notifications).await
    }
}

fn just_now(lang: Language) -> String {
    match lang {
        Language::En => "Just now".to_string(),
        Language::Ar => "الآن".to_string(),
    }
}
