pub mod alert_store;
pub mod alert_store_manager;
pub mod alert_store_repository;
pub mod alert_store_repository_trait;
