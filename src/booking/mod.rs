//! Multi-step appointment booking wizard.
//!
//! The wizard walks entity -> service -> date/time -> contact details ->
//! confirmation -> success. Moving forward requires the current step to be
//! complete; moving back is always allowed until the booking is submitted.

pub mod calendar;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::ServiceCatalog;
use crate::clock::Clock;
use crate::db::Storage;
use crate::errors::AppError;
use crate::models::{
    Appointment, BookingRequest, Language, LocalizedText, Notification, Route, Service,
};
use crate::AppContext;

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    SelectEntity,
    SelectService,
    SelectDateTime,
    PersonalDetails,
    Confirm,
    Success,
}

impl WizardStep {
    /// 1-based position shown in the progress bar.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectEntity => 1,
            WizardStep::SelectService => 2,
            WizardStep::SelectDateTime => 3,
            WizardStep::PersonalDetails => 4,
            WizardStep::Confirm => 5,
            WizardStep::Success => 6,
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            WizardStep::SelectEntity => Some(WizardStep::SelectService),
            WizardStep::SelectService => Some(WizardStep::SelectDateTime),
            WizardStep::SelectDateTime => Some(WizardStep::PersonalDetails),
            WizardStep::PersonalDetails => Some(WizardStep::Confirm),
            WizardStep::Confirm => Some(WizardStep::Success),
            WizardStep::Success => None,
        }
    }

    fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::SelectEntity => None,
            WizardStep::SelectService => Some(WizardStep::SelectEntity),
            WizardStep::SelectDateTime => Some(WizardStep::SelectService),
            WizardStep::PersonalDetails => Some(WizardStep::SelectDateTime),
            WizardStep::Confirm => Some(WizardStep::PersonalDetails),
            WizardStep::Success => None,
        }
    }
}

/// Contact fields collected on the personal details step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    /// Presence check only; formats are not validated.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The request was refused; the wizard did not move.
    Stay,
    /// The wizard moved to another step.
    Step(WizardStep),
    /// The wizard is done; the caller should navigate away.
    Exit(Route),
}

/// Everything shown on the confirmation step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub entity: String,
    pub service: String,
    pub center_name: String,
    pub center_address: String,
    pub date: String,
    pub time: String,
    pub contact: ContactDetails,
}

pub struct BookingWizard {
    request: BookingRequest,
    lang: Language,
    catalog: Arc<ServiceCatalog>,
    clock: Arc<dyn Clock>,
    step: WizardStep,
    selected_entity: Option<String>,
    selected_service_id: Option<String>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<String>,
    contact: ContactDetails,
    submitting: bool,
    last_error: Option<String>,
    /// Appointment written by an attempt that failed afterwards; retries reuse it.
    stored: Option<Appointment>,
    booked: Option<Appointment>,
}

/// Keeps `submitting` raised for as long as a submission is in flight,
/// including when the submission future is dropped part way.
struct SubmitFlag<'a>(&'a mut bool);

impl<'a> SubmitFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        SubmitFlag(flag)
    }
}

impl Drop for SubmitFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl BookingWizard {
    pub fn new(
        request: BookingRequest,
        lang: Language,
        catalog: Arc<ServiceCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        tracing::debug!(center_id = %request.center_id, "Booking wizard opened");
        Self {
            request,
            lang,
            catalog,
            clock,
            step: WizardStep::SelectEntity,
            selected_entity: None,
            selected_service_id: None,
            selected_date: None,
            selected_time: None,
            contact: ContactDetails::default(),
            submitting: false,
            last_error: None,
            stored: None,
            booked: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message of the last failed submission, cleared on the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The appointment created by a successful submission.
    pub fn booked_appointment(&self) -> Option<&Appointment> {
        self.booked.as_ref()
    }

    // ==================== SELECTIONS ====================

    /// Entities with at least one in-person service at the active center.
    pub fn available_entities(&self) -> Vec<String> {
        self.catalog
            .entities_at_center(&self.request.center_id, self.lang)
    }

    /// Services matching the selected entity at the active center.
    pub fn available_services(&self) -> Vec<&Service> {
        match &self.selected_entity {
            Some(entity) => self
                .catalog
                .services_for_booking(entity, &self.request.center_id),
            None => Vec::new(),
        }
    }

    pub fn selected_entity(&self) -> Option<&str> {
        self.selected_entity.as_deref()
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.selected_service_id
            .as_deref()
            .and_then(|id| self.catalog.get_service_by_id(id))
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Select an entity by its name in either language. The wizard keeps the
    /// name in its own language. Choosing a different entity clears the service.
    pub fn select_entity(&mut self, entity: &str) -> Result<(), AppError> {
        let name = self
            .catalog
            .services_for_booking(entity, &self.request.center_id)
            .first()
            .map(|s| s.entity.get(self.lang).to_string());

        let Some(name) = name else {
            tracing::warn!(entity = %entity, "Rejected entity not offered at center");
            let (center, _) = self.center_name_and_address();
            return Err(self.rejected(LocalizedText::new(
                format!("{} has no bookable services at {}", entity, center),
                format!("لا توجد خدمات قابلة للحجز لدى {} في {}", entity, center),
            )));
        };

        if self.selected_entity.as_deref() != Some(name.as_str()) {
            self.selected_service_id = None;
        }
        self.selected_entity = Some(name);
        Ok(())
    }

    pub fn select_service(&mut self, service_id: &str) -> Result<(), AppError> {
        if !self.available_services().iter().any(|s| s.id == service_id) {
            tracing::warn!(service_id = %service_id, "Rejected service outside current selection");
            return Err(self.rejected(LocalizedText::new(
                format!("Service {} cannot be booked here", service_id),
                format!("لا يمكن حجز الخدمة {} هنا", service_id),
            )));
        }

        self.selected_service_id = Some(service_id.to_string());
        Ok(())
    }

    /// Select a date. Past dates, weekends and dates past the booking window are refused.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), AppError> {
        if calendar::is_date_disabled(date, self.clock.today()) {
            tracing::warn!(%date, "Rejected unavailable date");
            return Err(self.rejected(LocalizedText::new(
                format!("{} is not available for booking", Language::En.format_date(date)),
                format!("التاريخ {} غير متاح للحجز", Language::Ar.format_date(date)),
            )));
        }

        self.selected_date = Some(date);
        Ok(())
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), AppError> {
        if !calendar::is_valid_time_slot(slot) {
            tracing::warn!(slot = %slot, "Rejected unknown time slot");
            return Err(self.rejected(LocalizedText::new(
                format!("{} is not a bookable time", slot),
                format!("الوقت {} غير متاح للحجز", slot),
            )));
        }

        self.selected_time = Some(slot.to_string());
        Ok(())
    }

    fn rejected(&self, message: LocalizedText) -> AppError {
        AppError::Validation(message.get(self.lang).to_string())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.contact.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.contact.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.contact.phone = phone.into();
    }

    // ==================== NAVIGATION ====================

    /// Whether `step` has everything it needs to move forward.
    pub fn can_proceed(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::SelectEntity => self
                .selected_entity
                .as_deref()
                .is_some_and(|e| !e.is_empty()),
            WizardStep::SelectService => self.selected_service_id.is_some(),
            WizardStep::SelectDateTime => {
                self.selected_date.is_some() && self.selected_time.is_some()
            }
            WizardStep::PersonalDetails => self.contact.is_complete(),
            WizardStep::Confirm => true,
            WizardStep::Success => false,
        }
    }

    /// Move to the next step. The confirmation step only advances through [`Self::submit`].
    pub fn next(&mut self) -> Navigation {
        if self.step == WizardStep::Confirm || !self.can_proceed(self.step) {
            return Navigation::Stay;
        }

        match self.step.next() {
            Some(step) => {
                tracing::debug!(from = self.step.number(), to = step.number(), "Wizard step");
                self.step = step;
                Navigation::Step(step)
            }
            None => Navigation::Stay,
        }
    }

    /// Move to the previous step, or exit from the first one.
    pub fn back(&mut self) -> Navigation {
        if self.submitting {
            return Navigation::Stay;
        }

        match self.step.previous() {
            Some(step) => {
                self.step = step;
                Navigation::Step(step)
            }
            None if self.step == WizardStep::SelectEntity => {
                Navigation::Exit((*self.request.previous_screen).clone())
            }
            None => Navigation::Stay,
        }
    }

    /// Route to the booked appointment, available once the booking succeeded.
    pub fn view_appointment(&self) -> Option<Route> {
        self.booked.as_ref().map(|a| Route::AppointmentDetails {
            appointment_id: a.id.clone(),
        })
    }

    /// Leave the success screen.
    pub fn finish(&self) -> Navigation {
        match self.step {
            WizardStep::Success => Navigation::Exit(Route::Home),
            _ => Navigation::Stay,
        }
    }

    // ==================== SUBMISSION ====================

    /// Service name stored on the appointment; a name chosen before entering
    /// the wizard wins over the wizard's own selection.
    pub fn service_display_name(&self) -> Option<String> {
        if let Some(name) = self.request.service_name.as_ref().filter(|n| !n.is_empty()) {
            return Some(name.clone());
        }
        self.selected_service()
            .map(|s| s.title.get(self.lang).to_string())
    }

    fn center_name_and_address(&self) -> (String, String) {
        match self.catalog.get_service_center(&self.request.center_id) {
            Some(center) => (
                center.name.get(self.lang).to_string(),
                center.address.get(self.lang).to_string(),
            ),
            None => (
                self.request.center_name.clone(),
                self.request.center_address.clone(),
            ),
        }
    }

    /// Confirmation summary, or `None` while any step is incomplete.
    pub fn summary(&self) -> Option<BookingSummary> {
        let entity = self.selected_entity.clone()?;
        let service = self.service_display_name()?;
        let date = self.selected_date?;
        let time = self.selected_time.clone()?;
        if !self.contact.is_complete() {
            return None;
        }

        let (center_name, center_address) = self.center_name_and_address();
        Some(BookingSummary {
            entity,
            service,
            center_name,
            center_address,
            date: self.lang.format_date(date),
            time,
            contact: self.contact.clone(),
        })
    }

    /// Book the appointment.
    ///
    /// Saves the appointment and its notification, waits the configured
    /// delay, then moves to [`WizardStep::Success`]. On failure the wizard
    /// stays on the confirmation step with [`Self::last_error`] set. A retry
    /// after a partly completed attempt updates the appointment it already
    /// wrote instead of booking a second one.
    pub async fn submit<S: Storage>(&mut self, ctx: &AppContext<S>) -> Result<Appointment, AppError> {
        if self.step != WizardStep::Confirm {
            return Err(self.rejected(LocalizedText::new(
                "Booking can only be submitted from the confirmation step",
                "لا يمكن إرسال الحجز إلا من خطوة التأكيد",
            )));
        }

        self.last_error = None;
        let result = match self.prepare_appointment() {
            Ok(appointment) => {
                let _flag = SubmitFlag::raise(&mut self.submitting);
                persist(ctx, &appointment, self.lang, &mut self.stored)
                    .await
                    .map(|()| appointment)
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(appointment) => {
                tracing::info!(
                    appointment_id = %appointment.id,
                    center_id = %self.request.center_id,
                    "Appointment booked"
                );
                self.step = WizardStep::Success;
                self.stored = None;
                self.booked = Some(appointment.clone());
                Ok(appointment)
            }
            Err(err) => {
                tracing::error!("Booking submission failed: {}", err);
                self.last_error = Some(err.user_message(self.lang));
                Err(err)
            }
        }
    }

    fn prepare_appointment(&self) -> Result<Appointment, AppError> {
        let summary = self.summary().ok_or_else(|| {
            self.rejected(LocalizedText::new(
                "Booking details are incomplete",
                "بيانات الحجز غير مكتملة",
            ))
        })?;

        let mut appointment = Appointment::confirmed(
            summary.service,
            summary.center_name,
            summary.date,
            summary.time,
            self.clock.now(),
        );
        if let Some(stored) = &self.stored {
            appointment.id = stored.id.clone();
            appointment.created_at = stored.created_at.clone();
        }
        Ok(appointment)
    }
}

async fn persist<S: Storage>(
    ctx: &AppContext<S>,
    appointment: &Appointment,
    lang: Language,
    stored: &mut Option<Appointment>,
) -> Result<(), AppError> {
    let replaced = match stored {
        Some(_) => ctx.appointments.replace_appointment(appointment).await?,
        None => false,
    };
    if !replaced {
        ctx.appointments.save_appointment(appointment).await?;
    }
    *stored = Some(appointment.clone());

    let notification: Notification = ctx
        .notifications
        .create_appointment_notification(appointment, lang)
        .await?;
    tracing::debug!(notification_id = %notification.id, "Booking notification created");

    if !ctx.config.submit_delay.is_zero() {
        tokio::time::sleep(ctx.config.submit_delay).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    // 2026-10-15 is a Thursday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn request() -> BookingRequest {
        BookingRequest {
            center_id: "sc-rayyan".to_string(),
            center_name: "Al Rayyan Service Center".to_string(),
            center_address: "Al Rayyan Road, Al Rayyan".to_string(),
            service_name: None,
            previous_screen: Box::new(Route::ServiceCenters {
                service_id: "police-clearance".to_string(),
            }),
        }
    }

    fn wizard() -> BookingWizard {
        BookingWizard::new(
            request(),
            Language::En,
            ServiceCatalog::builtin(),
            Arc::new(FixedClock::on(today())),
        )
    }

    #[test]
    fn test_step_one_gating() {
        let mut w = wizard();
        assert!(!w.can_proceed(WizardStep::SelectEntity));
        assert_eq!(w.next(), Navigation::Stay);
        assert_eq!(w.step(), WizardStep::SelectEntity);

        assert!(w.select_entity("Ministry of Education and Higher Education").is_err());
        assert!(!w.can_proceed(WizardStep::SelectEntity));

        w.select_entity("Ministry of Interior").unwrap();
        assert!(w.can_proceed(WizardStep::SelectEntity));
        assert_eq!(w.next(), Navigation::Step(WizardStep::SelectService));
    }

    #[test]
    fn test_changing_entity_clears_service() {
        let mut w = wizard();
        w.select_entity("Ministry of Interior").unwrap();
        w.select_service("police-clearance").unwrap();
        assert!(w.can_proceed(WizardStep::SelectService));

        w.select_entity("Ministry of Interior").unwrap();
        assert!(w.selected_service().is_some());

        w.select_entity("Ministry of Public Health").unwrap();
        assert!(w.selected_service().is_none());
        assert!(!w.can_proceed(WizardStep::SelectService));

        assert!(w.select_service("police-clearance").is_err());
        w.select_service("health-card-renewal").unwrap();
    }

    #[test]
    fn test_date_time_step_needs_both() {
        let mut w = wizard();
        assert!(!w.can_proceed(WizardStep::SelectDateTime));

        w.select_time("9:00 AM").unwrap();
        assert!(!w.can_proceed(WizardStep::SelectDateTime));

        let mut other = wizard();
        other
            .select_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap();
        assert!(!other.can_proceed(WizardStep::SelectDateTime));

        w.select_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap();
        assert!(w.can_proceed(WizardStep::SelectDateTime));
    }

    #[test]
    fn test_unavailable_dates_and_slots_are_rejected() {
        let mut w = wizard();
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();

        assert!(w.select_date(friday).is_err());
        assert!(w.select_date(yesterday).is_err());
        assert!(w.select_date(today()).is_ok());
        assert_eq!(w.selected_date(), Some(today()));

        assert!(matches!(
            w.select_time("1:30 PM"),
            Err(AppError::Validation(_))
        ));
        assert_eq!(w.selected_time(), None);
    }

    #[test]
    fn test_contact_presence_only() {
        let mut w = wizard();
        w.set_name("Aisha");
        w.set_email("not-an-email");
        assert!(!w.can_proceed(WizardStep::PersonalDetails));

        w.set_phone("   ");
        assert!(!w.can_proceed(WizardStep::PersonalDetails));

        w.set_phone("5551234");
        assert!(w.can_proceed(WizardStep::PersonalDetails));
        assert!(w.can_proceed(WizardStep::Confirm));
    }

    #[test]
    fn test_back_exits_from_first_step() {
        let mut w = wizard();
        assert_eq!(
            w.back(),
            Navigation::Exit(Route::ServiceCenters {
                service_id: "police-clearance".to_string()
            })
        );

        w.select_entity("Ministry of Interior").unwrap();
        w.next();
        assert_eq!(w.back(), Navigation::Step(WizardStep::SelectEntity));
        assert_eq!(w.finish(), Navigation::Stay);
    }

    #[test]
    fn test_confirm_does_not_advance_via_next() {
        let mut w = wizard();
        w.select_entity("Ministry of Interior").unwrap();
        w.next();
        w.select_service("police-clearance").unwrap();
        w.next();
        w.select_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap();
        w.select_time("9:00 AM").unwrap();
        w.next();
        w.set_name("Aisha");
        w.set_email("a@x.com");
        w.set_phone("5551234");
        assert_eq!(w.next(), Navigation::Step(WizardStep::Confirm));
        assert_eq!(w.next(), Navigation::Stay);
        assert_eq!(w.step(), WizardStep::Confirm);

        let summary = w.summary().unwrap();
        assert_eq!(summary.service, "Police Clearance Certificate");
        assert_eq!(summary.center_name, "Al Rayyan Service Center");
        assert_eq!(summary.date, "10/19/2026");
    }

    #[test]
    fn test_entity_accepted_in_either_language() {
        let mut w = wizard();
        w.select_entity("وزارة الداخلية").unwrap();
        assert_eq!(w.selected_entity(), Some("Ministry of Interior"));
        w.select_service("police-clearance").unwrap();

        w.select_entity("Ministry of Interior").unwrap();
        assert!(w.selected_service().is_some());
    }

    #[test]
    fn test_rejections_use_wizard_language() {
        let mut w = BookingWizard::new(
            request(),
            Language::Ar,
            ServiceCatalog::builtin(),
            Arc::new(FixedClock::on(today())),
        );
        let friday = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let err = w.select_date(friday).unwrap_err();
        assert_eq!(err.user_message(Language::Ar), "التاريخ ١٦/١٠/٢٠٢٦ غير متاح للحجز");

        let err = w.select_entity("Ministry of Education and Higher Education").unwrap_err();
        assert!(err.message().ends_with("في مركز خدمات الريان"));

        let err = w.select_time("1:30 PM").unwrap_err();
        assert_eq!(err.message(), "الوقت 1:30 PM غير متاح للحجز");

        let err = wizard().select_date(friday).unwrap_err();
        assert_eq!(err.message(), "10/16/2026 is not available for booking");
    }

    #[test]
    fn test_preselected_service_name_wins() {
        let mut w = BookingWizard::new(
            request().with_service_name("Police Clearance (Urgent)"),
            Language::En,
            ServiceCatalog::builtin(),
            Arc::new(FixedClock::on(today())),
        );
        assert_eq!(
            w.service_display_name().as_deref(),
            Some("Police Clearance (Urgent)")
        );

        w.select_entity("Ministry of Interior").unwrap();
        w.select_service("residence-permit-renewal").unwrap();
        assert_eq!(
            w.service_display_name().as_deref(),
            Some("Police Clearance (Urgent)")
        );
    }
}
