use log::debug;
use sd_core::ports::StorePort;
use sd_core::state::Reducer;
use tokio::sync::watch;

/// State container backed by a `tokio::sync::watch` channel.
///
/// The sender holds the current state; every dispatch runs the reducer in
/// place and wakes all subscribers. Dispatching with no subscribers is fine.
pub struct WatchStore<S: Reducer> {
    tx: watch::Sender<S>,
}

impl<S: Reducer> WatchStore<S> {
    pub fn new() -> Self {
        Self::with_state(S::default())
    }

    pub fn with_state(state: S) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }
}

impl<S: Reducer> Default for WatchStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Reducer> StorePort<S> for WatchStore<S> {
    fn snapshot(&self) -> S {
        self.tx.borrow().clone()
    }

    fn dispatch(&self, mutation: S::Mutation) {
        debug!("dispatch {:?}", mutation);
        self.tx.send_modify(move |state| {
            let current = std::mem::take(state);
            *state = current.reduce(mutation);
        });
    }

    fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}
