pub mod alert_service;
