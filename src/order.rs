//! Coffee order record and its validation stage

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::menu::{Category, Menu};
use crate::{Error, Result};

/// Milk value meaning the customer wants no milk
pub const NO_MILK: &str = "No milk / Black";

/// Extras display used when the extras list is empty
const NO_EXTRAS_DISPLAY: &str = "None";

/// One customer's coffee order
///
/// Field names on the wire match the persisted `order.json` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Beverage name, e.g. "Latte"
    pub drink_type: String,

    /// Drink size, e.g. "Tall"
    pub size: String,

    /// Milk choice; [`NO_MILK`] for black
    pub milk: String,

    /// Modifications in the order the customer gave them
    pub extras: Vec<String>,

    /// Customer name for the ticket
    pub name: String,
}

impl Order {
    /// Create a new order
    pub fn new(
        drink_type: impl Into<String>,
        size: impl Into<String>,
        milk: impl Into<String>,
        extras: Vec<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            drink_type: drink_type.into(),
            size: size.into(),
            milk: milk.into(),
            extras,
            name: name.into(),
        }
    }

    /// Extras as spoken back: "None" or a comma-joined list
    #[must_use]
    pub fn extras_display(&self) -> String {
        if self.extras.is_empty() {
            NO_EXTRAS_DISPLAY.to_string()
        } else {
            self.extras.join(", ")
        }
    }

    /// Whether the customer asked for no milk
    #[must_use]
    pub fn is_black(&self) -> bool {
        self.milk.trim().eq_ignore_ascii_case(NO_MILK)
    }

    /// Names of the text fields that are empty or whitespace
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("drink type", &self.drink_type),
            ("size", &self.size),
            ("milk", &self.milk),
            ("name", &self.name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Confirmation text spoken back after the order is saved
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Order confirmed!\n\
             Name: {}\n\
             Drink: {}\n\
             Size: {}\n\
             Milk: {}\n\
             Extras: {}\n\
             \n\
             Your order is being prepared now.",
            self.name,
            self.drink_type,
            self.size,
            self.milk,
            self.extras_display(),
        )
    }
}

/// How strictly orders are checked before they are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Accept anything the caller supplies
    #[default]
    Off,
    /// Require non-empty drink, size, milk and name
    Presence,
    /// Presence, plus drink, size and milk must be on the menu
    Menu,
}

impl FromStr for ValidationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "presence" => Ok(Self::Presence),
            "menu" => Ok(Self::Menu),
            other => Err(Error::Config(format!("unknown validation mode: {other}"))),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Presence => write!(f, "presence"),
            Self::Menu => write!(f, "menu"),
        }
    }
}

/// Pre-persistence check for orders
#[derive(Debug, Clone, Copy)]
pub struct OrderValidator {
    mode: ValidationMode,
    menu: &'static Menu,
}

impl OrderValidator {
    /// Create a validator against a menu
    #[must_use]
    pub const fn new(mode: ValidationMode, menu: &'static Menu) -> Self {
        Self { mode, menu }
    }

    /// Active validation mode
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Check an order
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` with a customer-facing reason when the
    /// order does not pass the configured mode
    pub fn validate(&self, order: &Order) -> Result<()> {
        if self.mode == ValidationMode::Off {
            return Ok(());
        }

        let missing = order.missing_fields();
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "I still need the {} for this order.",
                missing.join(" and ")
            )));
        }

        if self.mode == ValidationMode::Menu {
            let checks = [
                (Category::Drinks, "drink", &order.drink_type),
                (Category::Sizes, "size", &order.size),
                (Category::MilkOptions, "milk", &order.milk),
            ];
            for (category, label, value) in checks {
                if !self.menu.contains(category, value) {
                    return Err(Error::Validation(format!(
                        "Sorry, {value} isn't a {label} option on our menu."
                    )));
                }
            }
        }

        Ok(())
    }
}
