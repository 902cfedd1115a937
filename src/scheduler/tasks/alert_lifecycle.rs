use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::app_state::AppState;

/// Flips active alerts whose event window has fully passed to expired.
pub async fn run(state: &AppState) -> Result<()> {
    let today = Utc::now().date_naive();
    let expired = state.alert_store.expire_overdue(today).await;

    if expired.is_empty() {
        debug!("No overdue alerts to expire");
    } else {
        info!(count = expired.len(), ids = ?expired, "Expired overdue alerts");
    }

    Ok(())
}
