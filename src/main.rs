/*!
 * Grading Supervisor - Main Entry Point
 *
 * Drives one run of the exam grading pipeline:
 * - stage 1: per-student directory provisioning
 * - stage 2: concurrent exam attachment and scoring
 * - mean-score exchange over a named channel
 * - interrupt teardown with a synchronous cleanup worker
 */

use grader::monitoring::init_tracing;
use grader::{RunOutcome, Supervisor, SupervisorConfig};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let config = SupervisorConfig::from_env();
    let supervisor = match Supervisor::new(config) {
        Ok(supervisor) => supervisor,
        Err(e) => {
            error!(error = %e, "supervisor setup failed");
            return ExitCode::FAILURE;
        }
    };

    match supervisor.run().await {
        Ok(RunOutcome::Completed(mean)) => {
            info!(mean = %mean, "pipeline complete");
            ExitCode::SUCCESS
        }
        // teardown ran to completion; an interrupted run is a clean exit
        Ok(RunOutcome::Interrupted) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "pipeline failed");
            ExitCode::FAILURE
        }
    }
}
