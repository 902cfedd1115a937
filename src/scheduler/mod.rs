pub mod tasks;

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, error};

use crate::app_state::AppState;

/// Drives periodic maintenance. One tick per minute; each task owns its
/// own error handling so a failing task never kills the loop.
pub async fn run(state: AppState) {
    let mut tick = interval(Duration::from_secs(60));
    loop {
        tick.tick().await;
        debug!("Running minutely maintenance tasks...");

        if let Err(e) = tasks::alert_lifecycle::run(&state).await {
            error!(?e, "Alert lifecycle task failed");
        }
    }
}
