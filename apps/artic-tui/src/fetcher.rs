//! Runs fetch effects on the tokio runtime and reports back over a channel

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use artic_core::{run_effect, ArtworkSource, Effect, Msg};

pub struct Fetcher {
    handle: Handle,
    source: Arc<dyn ArtworkSource>,
    tx: UnboundedSender<Msg>,
}

impl Fetcher {
    pub fn new(handle: Handle, source: Arc<dyn ArtworkSource>, tx: UnboundedSender<Msg>) -> Self {
        Self { handle, source, tx }
    }

    /// Start a fetch; its result arrives later as a message.
    ///
    /// Fetches are never cancelled. Stale results are discarded by the
    /// update function using the effect's token.
    pub fn spawn(&self, effect: Effect) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let msg = run_effect(source.as_ref(), effect).await;
            if tx.send(msg).is_err() {
                tracing::debug!(token = %effect.token(), "UI gone, dropping fetch result");
            }
        });
    }
}
