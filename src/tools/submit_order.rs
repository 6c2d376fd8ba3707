//! `submit_order`: finalizes and persists a completed coffee order

use async_trait::async_trait;
use serde::Deserialize;

use super::{ToolContext, ToolDefinition, ToolHandler};
use crate::menu::MENU;
use crate::order::{Order, OrderValidator, ValidationMode};
use crate::store::SharedOrderStore;
use crate::{Error, Result};

/// Spoken when the order could not be saved
pub const ORDER_SAVE_FAILED_MESSAGE: &str =
    "Sorry, there was a system error saving your order. Please try again.";

/// Arguments the host runtime passes to `submit_order`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOrderArgs {
    pub drink_type: String,
    pub size: String,
    pub milk: String,
    #[serde(default)]
    pub extras: Vec<String>,
    pub name: String,
}

impl From<SubmitOrderArgs> for Order {
    fn from(args: SubmitOrderArgs) -> Self {
        Self::new(args.drink_type, args.size, args.milk, args.extras, args.name)
    }
}

/// The order submission tool
///
/// Never fails from the caller's point of view: store errors are logged and
/// turned into [`ORDER_SAVE_FAILED_MESSAGE`].
#[derive(Clone)]
pub struct SubmitOrderTool {
    store: SharedOrderStore,
    validator: OrderValidator,
}

impl SubmitOrderTool {
    /// Tool name registered with the host
    pub const NAME: &'static str = "submit_order";

    /// Create the tool over a store, with validation off
    #[must_use]
    pub fn new(store: SharedOrderStore) -> Self {
        Self {
            store,
            validator: OrderValidator::new(ValidationMode::Off, &MENU),
        }
    }

    /// Run orders through `validator` before persisting
    #[must_use]
    pub fn with_validator(mut self, validator: OrderValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Definition published to the host runtime
    #[must_use]
    pub fn tool_definition() -> ToolDefinition {
        ToolDefinition::function(
            Self::NAME,
            "Call this function ONLY when you have collected all details for the coffee order. \
             This function saves the order to the coffee shop system.",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "drink_type": {
                        "type": "string",
                        "description": "The type of coffee (e.g., Latte, Americano)"
                    },
                    "size": {
                        "type": "string",
                        "description": "The size of the drink (e.g., Tall, Grande, Venti)"
                    },
                    "milk": {
                        "type": "string",
                        "description": "Milk choice"
                    },
                    "extras": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of modifications or syrups"
                    },
                    "name": {
                        "type": "string",
                        "description": "The customer's name"
                    }
                },
                "required": ["drink_type", "size", "milk", "extras", "name"]
            }),
        )
    }

    /// Submit an order given its five fields
    pub async fn submit_order(
        &self,
        ctx: &ToolContext,
        drink_type: String,
        size: String,
        milk: String,
        extras: Vec<String>,
        name: String,
    ) -> String {
        self.submit(Order::new(drink_type, size, milk, extras, name), ctx)
            .await
    }

    /// Validate, persist and confirm an order
    ///
    /// Returns the text to speak: the confirmation, a validation prompt, or
    /// the fixed apology if the store write failed.
    pub async fn submit(&self, order: Order, ctx: &ToolContext) -> String {
        tracing::info!(
            session = ctx.session_id.as_deref().unwrap_or("-"),
            drink_type = %order.drink_type,
            size = %order.size,
            milk = %order.milk,
            extras = ?order.extras,
            name = %order.name,
            "processing order"
        );

        if let Err(e) = self.validator.validate(&order) {
            tracing::warn!(mode = %self.validator.mode(), error = %e, "order rejected");
            return match e {
                Error::Validation(reason) => reason,
                other => other.to_string(),
            };
        }

        match self.store.persist(&order).await {
            Ok(()) => {
                tracing::info!(store = %self.store.describe(), name = %order.name, "order saved");
                order.confirmation()
            }
            Err(e) => {
                tracing::error!(
                    store = %self.store.describe(),
                    error = %e,
                    detail = ?e,
                    "failed to save order"
                );
                ORDER_SAVE_FAILED_MESSAGE.to_string()
            }
        }
    }
}

#[async_trait]
impl ToolHandler for SubmitOrderTool {
    fn definition(&self) -> ToolDefinition {
        Self::tool_definition()
    }

    async fn execute(&self, arguments: &str, ctx: &ToolContext) -> Result<String> {
        let args: SubmitOrderArgs = serde_json::from_str(arguments)
            .map_err(|e| Error::Tool(format!("{}: invalid arguments: {e}", Self::NAME)))?;

        Ok(self.submit(args.into(), ctx).await)
    }
}
