// In-memory hotel reservation tracker

pub mod client;
pub mod config;
pub mod export;
pub mod manager;
pub mod reservation;

// Re-export key types for convenience
pub use client::Client;
pub use config::{ConfigError, ManagerConfig};
pub use export::{to_json, to_xml, ExportError};
pub use manager::{ReservationError, ReservationManager, SharedReservationManager};
pub use reservation::{calculate_price, Reservation, ReservationId};
