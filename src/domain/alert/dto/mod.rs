pub mod alert_save_request;
