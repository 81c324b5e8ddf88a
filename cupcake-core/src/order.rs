use serde::{Deserialize, Serialize};
use std::fmt;

use crate::flavor;

pub const MIN_QUANTITY: i64 = 3;
pub const MAX_QUANTITY: i64 = 20;

/// A cupcake purchase plus its shipping details.
///
/// Field declaration order is the wire order: `type`, `quantity`,
/// `extraFrosting`, `addSprinkles`, `name`, `streetAddress`, `city`, `zipcode`.
/// `special_requests` only drives the form and never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "type")]
    pub flavor: i64,
    pub quantity: i64,
    pub extra_frosting: bool,
    pub add_sprinkles: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub zipcode: String,
    #[serde(skip)]
    pub special_requests: bool,
}

impl Order {
    pub fn new() -> Self {
        Self {
            flavor: 0,
            quantity: MIN_QUANTITY,
            extra_frosting: false,
            add_sprinkles: false,
            name: String::new(),
            street_address: String::new(),
            city: String::new(),
            zipcode: String::new(),
            special_requests: false,
        }
    }

    /// True when every shipping field has been filled in.
    ///
    /// Flavor and quantity are kept in range by the form controls and are not
    /// checked here.
    pub fn is_valid(&self) -> bool {
        !(self.name.is_empty()
            || self.street_address.is_empty()
            || self.city.is_empty()
            || self.zipcode.is_empty())
    }

    pub fn flavor_name(&self) -> Option<&'static str> {
        usize::try_from(self.flavor).ok().and_then(flavor::flavor_name)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order: {} x{} (frosting: {}, sprinkles: {}) for {}, {}, {} {}",
            self.flavor_name().unwrap_or("Unknown"),
            self.quantity,
            self.extra_frosting,
            self.add_sprinkles,
            self.name,
            self.street_address,
            self.city,
            self.zipcode,
        )
    }
}
