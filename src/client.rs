use serde::{Deserialize, Serialize};

// A hotel guest. The name is the key used for double-booking checks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Client {
    pub name: String,
    pub age: u32,
    // metres
    pub height: f64,
}

impl Client {
    pub fn new(name: impl Into<String>, age: u32, height: f64) -> Self {
        Self {
            name: name.into(),
            age,
            height,
        }
    }

    pub fn same_person(&self, other: &Client) -> bool {
        self.name == other.name
    }
}
