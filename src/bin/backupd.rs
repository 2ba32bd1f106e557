/*!
 * Backup Daemon - Entry Point
 * Copies the working tree into a sibling backup directory every minute
 */

use grader::core::limits::{BACKUP_INTERVAL, DEFAULT_BACKUP_PATH};
use grader::monitoring::init_tracing;
use grader::workers::backup_tree;
use std::path::Path;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut ticker = tokio::time::interval(BACKUP_INTERVAL);
    loop {
        ticker.tick().await;
        match backup_tree(Path::new("."), Path::new(DEFAULT_BACKUP_PATH)) {
            Ok(copied) => info!(copied, "backup pass complete"),
            Err(e) => warn!(error = %e, "backup pass failed"),
        }
    }
}
