//! Services for parking-service: persistence, pricing and stamping.

pub mod clock;
pub mod database;
pub mod pricing;

pub use clock::OffsetClock;
pub use database::Database;
