use serde::{
  Deserialize,
  Serialize
};

pub type TaskId = u64;

pub const FIRST_TASK_ID: TaskId = 1;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        TaskId,
  pub text:      String,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  pub fn new_pending(
    id: TaskId,
    text: String
  ) -> Self {
    Self {
      id,
      text,
      completed: false
    }
  }

  pub fn is_pending(&self) -> bool {
    !self.completed
  }
}
