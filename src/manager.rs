// Reservation manager: identifier assignment, double-booking checks and the active listing

use crate::client::Client;
use crate::config::ManagerConfig;
use crate::reservation::{calculate_price, Reservation, ReservationId};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReservationError {
    #[error("Reservation id {0} already exists")]
    DuplicateIdentifier(ReservationId),

    #[error("Client {name} already has another reservation")]
    ClientAlreadyBooked { name: String },

    #[error("No reservation with id {0}")]
    ReservationNotFound(ReservationId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug)]
pub struct ReservationManager {
    config: ManagerConfig,
    last_id: ReservationId,
    reservations: Vec<Reservation>,
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl ReservationManager {
    pub fn new(config: ManagerConfig) -> Self {
        Self {
            config,
            last_id: 0,
            reservations: Vec::new(),
        }
    }

    pub fn hotel_name(&self) -> &str {
        &self.config.hotel_name
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // Book `clients` for `duration` nights.
    //
    // The identifier is consumed as soon as input validation passes, so a
    // rejected booking leaves a gap in the sequence. Identifiers are never reused.
    pub fn create(
        &mut self,
        clients: Vec<Client>,
        duration: u32,
        breakfast: bool,
    ) -> Result<Reservation, ReservationError> {
        if clients.is_empty() {
            warn!("Rejecting reservation without clients");
            return Err(ReservationError::InvalidInput(
                "a reservation needs at least one client".to_string(),
            ));
        }
        if duration == 0 {
            warn!("Rejecting reservation with zero-night duration");
            return Err(ReservationError::InvalidInput(
                "duration must be at least one night".to_string(),
            ));
        }

        self.last_id += 1;
        let id = self.last_id;

        let price = calculate_price(clients.len(), duration, breakfast, &self.config);
        debug!(
            id,
            clients = clients.len(),
            duration,
            breakfast,
            price,
            "Priced reservation"
        );

        // Unreachable while ids come from the counter alone
        if self.reservations.iter().any(|r| r.id == id) {
            warn!(id, "Reservation id already exists");
            return Err(ReservationError::DuplicateIdentifier(id));
        }

        if let Some(client) = clients
            .iter()
            .find(|client| self.reservations.iter().any(|r| r.includes(client)))
        {
            warn!(id, client = %client.name, "Client already has another reservation");
            return Err(ReservationError::ClientAlreadyBooked {
                name: client.name.clone(),
            });
        }

        let reservation = Reservation {
            id,
            hotel_name: self.config.hotel_name.clone(),
            clients,
            duration,
            price,
            breakfast,
            created_at: Utc::now(),
        };
        self.reservations.push(reservation.clone());

        info!(id, price, "Reservation created");
        Ok(reservation)
    }

    pub fn cancel(&mut self, id: ReservationId) -> Result<(), ReservationError> {
        let Some(index) = self.reservations.iter().position(|r| r.id == id) else {
            warn!(id, "Cannot cancel unknown reservation");
            return Err(ReservationError::ReservationNotFound(id));
        };

        // Vec::remove keeps the remaining entries in insertion order
        self.reservations.remove(index);
        info!(id, remaining = self.reservations.len(), "Reservation cancelled");
        Ok(())
    }

    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

// Thread-safe handle: one lock held for the whole of each operation
#[derive(Debug, Clone, Default)]
pub struct SharedReservationManager {
    inner: Arc<Mutex<ReservationManager>>,
}

impl SharedReservationManager {
    pub fn new(config: ManagerConfig) -> Self {
        Self::from_manager(ReservationManager::new(config))
    }

    pub fn from_manager(manager: ReservationManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn create(
        &self,
        clients: Vec<Client>,
        duration: u32,
        breakfast: bool,
    ) -> Result<Reservation, ReservationError> {
        self.inner.lock().create(clients, duration, breakfast)
    }

    pub fn cancel(&self, id: ReservationId) -> Result<(), ReservationError> {
        self.inner.lock().cancel(id)
    }

    // Owned snapshot; later changes to the manager do not show up in it
    pub fn list(&self) -> Vec<Reservation> {
        self.inner.lock().list().to_vec()
    }

    pub fn get(&self, id: ReservationId) -> Option<Reservation> {
        self.inner.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn hotel_name(&self) -> String {
        self.inner.lock().hotel_name().to_string()
    }
}
