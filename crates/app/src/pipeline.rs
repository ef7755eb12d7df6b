//! Gesture pipeline task
//!
//! Owns the resolver and drives it from a channel of observations. The
//! resolver itself is single-threaded; everything asynchronous stays out
//! here. The accumulated word is mirrored into a shared handle so UI-side
//! readers never touch resolver state.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use signflow_gesture::{Observation, ResolverConfig, SignEvent, SignResolver};
use signflow_telemetry::PipelineMetrics;

/// Shared, read-mostly view of the accumulated word.
pub type WordHandle = Arc<Mutex<String>>;

/// User-initiated edits, delivered from the UI side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineCommand {
    /// Delete the trailing character of the word.
    DeleteLast,
    /// Append a word separator.
    AppendSpace,
    /// Drop all recognition state and the word.
    Reset,
}

pub struct GesturePipeline {
    obs_rx: mpsc::Receiver<Observation>,
    cmd_rx: mpsc::Receiver<PipelineCommand>,
    event_tx: mpsc::Sender<SignEvent>,
    resolver: SignResolver,
    word: WordHandle,
    metrics: Arc<PipelineMetrics>,
}

impl GesturePipeline {
    pub fn new(
        config: ResolverConfig,
        obs_rx: mpsc::Receiver<Observation>,
        cmd_rx: mpsc::Receiver<PipelineCommand>,
        event_tx: mpsc::Sender<SignEvent>,
        metrics: Arc<PipelineMetrics>,
    ) -> Self {
        Self {
            obs_rx,
            cmd_rx,
            event_tx,
            resolver: SignResolver::new(config),
            word: Arc::new(Mutex::new(String::new())),
            metrics,
        }
    }

    /// Handle for readers; clone freely, the pipeline keeps writing to it.
    pub fn word_handle(&self) -> WordHandle {
        self.word.clone()
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Processes observations until the source side closes its channel.
    pub async fn run(mut self) {
        info!("gesture pipeline started");
        let mut commands_open = true;
        loop {
            tokio::select! {
                maybe_obs = self.obs_rx.recv() => match maybe_obs {
                    Some(obs) => self.handle_observation(obs).await,
                    None => {
                        debug!("observation channel closed, stopping pipeline");
                        break;
                    }
                },
                maybe_cmd = self.cmd_rx.recv(), if commands_open => match maybe_cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => commands_open = false,
                },
            }
        }
        info!(word = %self.resolver.word(), "gesture pipeline stopped");
    }

    async fn handle_observation(&mut self, obs: Observation) {
        self.metrics.record_frame();
        if obs.label.trim().is_empty() {
            self.metrics.record_no_gesture();
            return;
        }
        if let Some(event) = self.resolver.process(&obs) {
            self.metrics.record_letter();
            if matches!(
                event,
                SignEvent::LetterAppended {
                    movement_confirmed: true,
                    ..
                }
            ) {
                self.metrics.record_dynamic_match();
            }
            self.sync_word();
            if self.event_tx.send(event).await.is_err() {
                debug!("event receiver dropped, letters no longer published");
            }
        }
    }

    fn handle_command(&mut self, cmd: PipelineCommand) {
        debug!(?cmd, "applying word edit");
        match cmd {
            PipelineCommand::DeleteLast => self.resolver.pop_letter(),
            PipelineCommand::AppendSpace => self.resolver.push_space(),
            PipelineCommand::Reset => self.resolver.reset(),
        }
        self.metrics.record_word_edit();
        self.sync_word();
    }

    fn sync_word(&self) {
        *self.word.lock() = self.resolver.word().to_string();
    }
}
