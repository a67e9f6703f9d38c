mod contact_handler;
mod errors;
mod types;

pub use contact_handler::{INVALID_BODY, NOT_CONFIGURED_NOTICE, contact, json_config};
pub use errors::{ContactError, DELIVERY_FAILED};
pub use types::ContactResponse;
