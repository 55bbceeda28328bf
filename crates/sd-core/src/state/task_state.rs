use serde::Serialize;

use super::Reducer;
use crate::task::Task;

/// Projection owned by the task screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskState {
    pub task_list: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    SetTaskList(Vec<Task>),
}

impl Reducer for TaskState {
    type Mutation = TaskMutation;

    fn reduce(mut self, mutation: TaskMutation) -> Self {
        match mutation {
            TaskMutation::SetTaskList(tasks) => self.task_list = tasks,
        }
        self
    }
}
