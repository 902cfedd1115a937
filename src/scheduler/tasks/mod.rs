pub mod alert_lifecycle;
