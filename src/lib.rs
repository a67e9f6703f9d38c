pub mod configuration;
pub mod contact_form;
pub mod contact_inbox;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
