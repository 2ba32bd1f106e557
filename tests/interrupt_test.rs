/*!
 * Interrupt Teardown Test
 * Delivers a real SIGINT to the supervisor mid-pipeline
 *
 * Kept in its own test binary: the signal is delivered process-wide,
 * so no other test may share this process.
 */

mod common;

use common::write_worker;
use grader::{RunOutcome, RunState, Supervisor, SupervisorConfig};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
#[serial]
async fn test_interrupt_mid_pipeline_tears_down_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("cleaned");
    // stage-1 parks the pipeline long enough for the interrupt to land
    write_worker(dir.path(), "provisioner", "sleep 30");
    write_worker(dir.path(), "cleaner", &format!("touch {}", marker.display()));

    let config = SupervisorConfig::with_worker_dir(dir.path())
        .with_channel_path(dir.path().join("avg_fifo"))
        .with_journal_path(dir.path().join("log.txt"));
    let journal_path = config.journal_path.clone();

    let supervisor = Arc::new(Supervisor::new(config).unwrap());
    let running = Arc::clone(&supervisor);
    let run = tokio::spawn(async move { running.run().await });

    // wait until stage 1 is underway, which guarantees the interrupt
    // listener is installed and one process is registered
    let mut waited = Duration::ZERO;
    loop {
        let log = std::fs::read_to_string(&journal_path).unwrap_or_default();
        if log.contains("registered process") {
            break;
        }
        assert!(waited < Duration::from_secs(10), "stage 1 never started");
        tokio::time::sleep(Duration::from_millis(50)).await;
        waited += Duration::from_millis(50);
    }

    kill(Pid::this(), Signal::SIGINT).unwrap();

    let outcome = run.await.unwrap().unwrap();
    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(supervisor.state(), RunState::Terminated);

    // every registered process was targeted and the cleanup worker ran
    let log = std::fs::read_to_string(&journal_path).unwrap();
    assert!(log.contains("received interrupt -- cleaning up and killing 1 processes"));
    assert!(log.contains("killing process"));
    assert!(log.contains("grader: done killing processes"));
    assert!(log.contains("grader: cleanup worker finished"));
    assert!(marker.exists());
}
