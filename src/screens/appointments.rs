//! Appointment list and details.

use crate::db::Storage;
use crate::errors::AppError;
use crate::models::{Appointment, AppointmentStatus, BookingRequest, Language, Notification, Route};
use crate::AppContext;

/// What a cancel request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The appointment is now cancelled and its notices were replaced.
    Cancelled(Notification),
    /// The appointment was cancelled before; nothing changed.
    AlreadyCancelled,
    /// No appointment has that id; nothing changed.
    NotFound,
}

/// Load an appointment for the details screen. `None` renders the empty state.
pub async fn load_appointment<S: Storage>(
    ctx: &AppContext<S>,
    appointment_id: &str,
) -> Result<Option<Appointment>, AppError> {
    ctx.appointments.get_appointment_by_id(appointment_id).await
}

/// Confirmed appointments, newest first.
pub async fn upcoming_appointments<S: Storage>(
    ctx: &AppContext<S>,
) -> Result<Vec<Appointment>, AppError> {
    Ok(ctx
        .appointments
        .get_appointments()
        .await?
        .into_iter()
        .filter(|a| a.status == AppointmentStatus::Confirmed)
        .collect())
}

/// Cancel an appointment and swap its notifications for a cancellation notice.
///
/// Repeating the call is harmless: an appointment that is already cancelled
/// produces no second notice.
pub async fn cancel_appointment<S: Storage>(
    ctx: &AppContext<S>,
    appointment_id: &str,
    lang: Language,
) -> Result<CancelOutcome, AppError> {
    let Some(appointment) = ctx.appointments.get_appointment_by_id(appointment_id).await? else {
        return Ok(CancelOutcome::NotFound);
    };

    if appointment.is_cancelled() {
        tracing::debug!(
            appointment_id = %appointment_id,
            status = appointment.status.as_str(),
            "Cancel skipped"
        );
        return Ok(CancelOutcome::AlreadyCancelled);
    }

    ctx.appointments.cancel_appointment(appointment_id).await?;
    let notice = ctx
        .notifications
        .cancel_appointment_notification(appointment_id, lang)
        .await?;

    Ok(CancelOutcome::Cancelled(notice))
}

/// Route that restarts the wizard at the appointment's center.
///
/// Rescheduling never edits the record; the user books a new one. Fails with
/// `NotFound` when the stored location no longer names a known center.
pub fn reschedule_route<S: Storage>(
    ctx: &AppContext<S>,
    appointment: &Appointment,
    lang: Language,
) -> Result<Route, AppError> {
    let center = ctx
        .catalog
        .service_centers()
        .iter()
        .find(|c| c.name.matches(&appointment.location))
        .ok_or_else(|| {
            AppError::NotFound(format!("No service center named {}", appointment.location))
        })?;

    let request = BookingRequest::for_center(
        center,
        lang,
        Route::AppointmentDetails {
            appointment_id: appointment.id.clone(),
        },
    )
    .with_service_name(appointment.service.clone());

    Ok(Route::BookAppointment(request))
}
