//! Domain models for parking-service.

mod registration;
mod tariff;

pub use registration::{NewRegistration, Registration, RegistrationChanges};
pub use tariff::{NewTariff, Tariff, TariffChanges};
