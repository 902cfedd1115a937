pub mod alert_edits_request;
pub mod justification_request;
