// Renders the active listing for display or hand-off: JSON or XML
use crate::client::Client;
use crate::reservation::{Reservation, ReservationId};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    JsonError(String),

    #[error("XML serialization error: {0}")]
    XmlError(String),
}

// Structures for XML serialization
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename = "Reservations")]
pub struct XmlReservations {
    #[serde(rename = "@hotel")]
    pub hotel: String,
    #[serde(rename = "Reservation")]
    pub reservations: Vec<XmlReservation>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct XmlReservation {
    #[serde(rename = "@id")]
    pub id: ReservationId,
    #[serde(rename = "@duration")]
    pub duration: u32,
    #[serde(rename = "@breakfast")]
    pub breakfast: bool,
    #[serde(rename = "@price")]
    pub price: String,
    #[serde(rename = "@createdAt")]
    pub created_at: String,
    #[serde(rename = "Clients")]
    pub clients: XmlClients,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct XmlClients {
    #[serde(rename = "Client")]
    pub clients: Vec<XmlClient>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct XmlClient {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@age")]
    pub age: u32,
    #[serde(rename = "@height")]
    pub height: String,
}

impl From<&Client> for XmlClient {
    fn from(client: &Client) -> Self {
        XmlClient {
            name: client.name.clone(),
            age: client.age,
            height: format!("{:.2}", client.height),
        }
    }
}

impl From<&Reservation> for XmlReservation {
    fn from(reservation: &Reservation) -> Self {
        XmlReservation {
            id: reservation.id,
            duration: reservation.duration,
            breakfast: reservation.breakfast,
            price: format!("{:.2}", reservation.price),
            created_at: reservation.created_at.to_rfc3339(),
            clients: XmlClients {
                clients: reservation.clients.iter().map(XmlClient::from).collect(),
            },
        }
    }
}

pub fn to_json(reservations: &[Reservation]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(reservations).map_err(|e| ExportError::JsonError(e.to_string()))
}

pub fn to_xml(hotel: &str, reservations: &[Reservation]) -> Result<String, ExportError> {
    let document = XmlReservations {
        hotel: hotel.to_string(),
        reservations: reservations.iter().map(XmlReservation::from).collect(),
    };

    quick_xml::se::to_string(&document).map_err(|e| ExportError::XmlError(e.to_string()))
}
