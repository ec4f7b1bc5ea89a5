use crate::client::Client;
use crate::config::ManagerConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReservationId = u64;

// An accepted booking. Built only by the manager and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub hotel_name: String,
    pub clients: Vec<Client>,
    // nights
    pub duration: u32,
    pub price: f64,
    pub breakfast: bool,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn includes(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.same_person(client))
    }
}

// Total price: clients x base price x nights, with breakfast as a flat surcharge factor
pub fn calculate_price(
    client_count: usize,
    duration: u32,
    breakfast: bool,
    config: &ManagerConfig,
) -> f64 {
    let breakfast_multiplier = if breakfast {
        config.breakfast_multiplier
    } else {
        1.0
    };

    client_count as f64 * config.base_price * f64::from(duration) * breakfast_multiplier
}
