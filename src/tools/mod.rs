//! Tools exposed to the host conversational runtime

mod definition;
pub mod executor;
mod submit_order;

pub use definition::{FunctionDefinition, ToolDefinition};
pub use executor::{ToolContext, ToolExecutor, ToolHandler};
pub use submit_order::{ORDER_SAVE_FAILED_MESSAGE, SubmitOrderArgs, SubmitOrderTool};
