use tokio::sync::watch;

use crate::state::Reducer;

/// An injected state container for one namespace of projected state.
///
/// Every change goes through [`dispatch`](StorePort::dispatch), which runs
/// the state's reducer. Readers either take a [`snapshot`](StorePort::snapshot)
/// or [`subscribe`](StorePort::subscribe) to be woken on each change.
pub trait StorePort<S: Reducer>: Send + Sync {
    fn snapshot(&self) -> S;

    fn dispatch(&self, mutation: S::Mutation);

    fn subscribe(&self) -> watch::Receiver<S>;
}
