//! Domain values relayed to the upstream CRM.

pub mod submission;
pub mod types;
