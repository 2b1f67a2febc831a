pub mod demo;

mod leads;
mod library;

pub use leads::{validate_email, validate_phone, LeadBook, NewLead, LEAD_TIME_FORMAT};
pub use library::{BlogLibrary, RECENT_LIMIT};
