//! Projected state and its reducers.
//!
//! Each namespace (spiders, tasks) is a plain value plus a mutation enum.
//! [`Reducer::reduce`] is a pure function from (state, mutation) to the next
//! state; stores only ever change state through it.

mod spider_state;
mod task_state;

pub use spider_state::{SpiderMutation, SpiderState};
pub use task_state::{TaskMutation, TaskState};

pub trait Reducer: Clone + Default + Send + Sync + 'static {
    type Mutation: std::fmt::Debug + Send + 'static;

    fn reduce(self, mutation: Self::Mutation) -> Self;
}
