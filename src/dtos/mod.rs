//! Request and response shapes for the HTTP surface.

mod registration;
mod tariff;

pub use registration::{InsertRegistrationBody, RegistrationResponse};
pub use tariff::{InsertTariffBody, TariffResponse};

use serde::Serialize;

/// Confirmation body for operations that reply with a plain message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
