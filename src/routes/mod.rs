mod contact;
mod health_check;
mod helpers;

pub use contact::{
    ContactError, ContactResponse, DELIVERY_FAILED, INVALID_BODY, NOT_CONFIGURED_NOTICE, contact,
    json_config,
};
pub use health_check::health_check;
