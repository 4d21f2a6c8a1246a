//! Sharek booking core
//!
//! Appointment booking wizard, local persistence for appointments and
//! notifications, and the static service catalog of the Sharek e-services app.

pub mod booking;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod screens;

use std::sync::Arc;

use booking::BookingWizard;
use catalog::ServiceCatalog;
use clock::{Clock, SystemClock};
use config::Config;
use db::{AppointmentRepository, NotificationRepository, Storage};
use models::BookingRequest;

/// Application services shared by every screen.
#[derive(Clone)]
pub struct AppContext<S: Storage> {
    pub appointments: AppointmentRepository<S>,
    pub notifications: NotificationRepository<S>,
    pub catalog: Arc<ServiceCatalog>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

impl<S: Storage> AppContext<S> {
    /// Build a context over `storage` with the built-in catalog and the system clock.
    pub fn new(storage: S, config: Config) -> Self {
        Self {
            appointments: AppointmentRepository::new(storage.clone(), config.seed_demo_data),
            notifications: NotificationRepository::new(storage),
            catalog: ServiceCatalog::builtin(),
            clock: Arc::new(SystemClock),
            config: Arc::new(config),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<ServiceCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Open the booking wizard in the configured language.
    pub fn booking_wizard(&self, request: BookingRequest) -> BookingWizard {
        BookingWizard::new(
            request,
            self.config.language,
            Arc::clone(&self.catalog),
            Arc::clone(&self.clock),
        )
    }
}
