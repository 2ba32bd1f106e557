/*!
 * Pipeline Supervisor
 * Drives the grading pipeline: stage-1 provisioning, concurrent stage-2
 * workers, the exchange-channel read, and interrupt teardown
 */

use super::config::SupervisorConfig;
use super::spawner::spawn_worker;
use super::types::{RunOutcome, RunState, SupervisorError, SupervisorResult};
use crate::channel::ExchangeChannel;
use crate::core::limits::PROGNAME;
use crate::journal::Journal;
use crate::registry::ProcessRegistry;
use parking_lot::Mutex;
use tokio::process::Child;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{debug, warn};

/// Orchestrates one run of the grading pipeline.
///
/// The supervisor is single-threaded logic that blocks at well-defined
/// await points. The interrupt is observed as a message on a signal
/// stream raced against the pipeline future, so teardown always runs on
/// the main flow — never inside an asynchronous signal context.
pub struct Supervisor {
    config: SupervisorConfig,
    journal: Journal,
    registry: ProcessRegistry,
    state: Mutex<RunState>,
}

impl Supervisor {
    /// Open the journal and build a supervisor ready to run.
    pub fn new(config: SupervisorConfig) -> SupervisorResult<Self> {
        let journal =
            Journal::open(PROGNAME, &config.journal_path).map_err(SupervisorError::JournalOpen)?;
        let registry = ProcessRegistry::with_journal(journal.clone());
        Ok(Self {
            config,
            journal,
            registry,
            state: Mutex::new(RunState::Init),
        })
    }

    pub fn state(&self) -> RunState {
        *self.state.lock()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    fn advance(&self, next: RunState) -> SupervisorResult<()> {
        let mut state = self.state.lock();
        if !state.can_advance_to(next) {
            return Err(SupervisorError::InvalidStateTransition {
                from: *state,
                to: next,
            });
        }
        debug!(from = ?*state, to = ?next, "run state advanced");
        *state = next;
        Ok(())
    }

    /// Drive the full pipeline once.
    ///
    /// The interrupt listener is installed before any process spawn so
    /// that even a very early interrupt has cleanup coverage. Whatever
    /// happens — completion, failure, interrupt — the exchange channel
    /// is destroyed before this method returns.
    pub async fn run(&self) -> SupervisorResult<RunOutcome> {
        let mut interrupt =
            signal(SignalKind::interrupt()).map_err(SupervisorError::SignalRegistrationFailed)?;

        let outcome = tokio::select! {
            res = self.run_pipeline() => res,
            _ = interrupt.recv() => {
                if let Err(e) = self.advance(RunState::Interrupted) {
                    warn!(error = %e, "state transition during interrupt");
                }
                self.teardown().await;
                Ok(RunOutcome::Interrupted)
            }
        };

        if let Err(e) = &outcome {
            self.journal.record(format!("error: {e}"));
        }

        // unified cleanup path, shared by success, failure and interrupt
        if let Err(e) = ExchangeChannel::at(&self.config.channel_path).destroy() {
            warn!(error = %e, "channel destroy failed during cleanup");
        }
        if let Err(e) = self.advance(RunState::Terminated) {
            warn!(error = %e, "state transition during cleanup");
        }

        outcome
    }

    async fn run_pipeline(&self) -> SupervisorResult<RunOutcome> {
        // stage 1: per-student directories must exist before stage 2
        self.advance(RunState::Stage1Running)?;
        self.journal.record("creating student directories");
        let mut stage1 = self.spawn_registered(&self.config.provisioner)?;
        // exit status intentionally not validated, see DESIGN.md
        let _ = stage1.wait().await;
        self.advance(RunState::Stage1Done)?;
        self.journal.record("student directories created");

        // the read end must be open before the writer spawns, otherwise
        // the writer blocks on open with no reader present
        let channel = ExchangeChannel::create(&self.config.channel_path)?;
        let mut receiver = channel.open_for_read()?;

        // stage 2: exam attachment and scoring run concurrently
        self.advance(RunState::Stage2Running)?;
        self.journal.record("invoking exam-attach and scoring workers");
        let mut attacher = self.spawn_registered(&self.config.exam_attacher)?;
        let mut scorer = self.spawn_registered(&self.config.scorer)?;

        let _ = attacher.wait().await;
        let _ = scorer.wait().await;
        self.advance(RunState::Stage2Done)?;
        self.journal.record("exam-attach and scoring workers terminated");

        let mean = ExchangeChannel::read_value(&mut receiver).await?;
        self.advance(RunState::ResultRead)?;
        self.journal.record(format!("average score read from pipe: {mean}"));

        Ok(RunOutcome::Completed(mean))
    }

    /// Spawn a worker and register it immediately, before any wait, so
    /// an interrupt arriving mid-wait already has it tracked.
    fn spawn_registered(&self, image: &std::path::Path) -> SupervisorResult<Child> {
        let child = spawn_worker(image)?;
        if let Some(pid) = child.id() {
            self.registry.register(pid)?;
        }
        Ok(child)
    }

    /// Interrupt teardown: kill every registered worker newest-first,
    /// then run the cleanup worker synchronously, exactly once. Zero
    /// registered processes is a valid, non-error state.
    pub async fn teardown(&self) {
        self.journal.record(format!(
            "received interrupt -- cleaning up and killing {} processes",
            self.registry.len()
        ));
        self.registry.terminate_all();
        self.journal.record("done killing processes");

        match spawn_worker(&self.config.cleaner) {
            Ok(mut cleaner) => {
                if let Some(pid) = cleaner.id() {
                    // best-effort: the registry was just drained
                    let _ = self.registry.register(pid);
                }
                let _ = cleaner.wait().await;
                self.journal.record("cleanup worker finished");
            }
            Err(e) => {
                self.journal.record(format!("error spawning cleanup worker: {e}"));
            }
        }
    }
}
