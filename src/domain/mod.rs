mod contact_email;
mod contact_name;
mod contact_submission;
mod mailbox_address;
mod message_body;
mod new_contact_message;

pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use contact_submission::ContactSubmission;
pub use mailbox_address::MailboxAddress;
pub use message_body::MessageBody;
pub use new_contact_message::NewContactMessage;
