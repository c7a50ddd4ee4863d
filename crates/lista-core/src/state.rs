use tracing::{
  debug,
  trace
};

use crate::task::{
  FIRST_TASK_ID,
  Task,
  TaskId
};

/// Ordered task sequence plus the id
/// counter that feeds new tasks.
///
/// Tasks keep insertion order. The
/// pending subset is never stored; it is
/// derived from the sequence on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
  tasks:   Vec<Task>,
  next_id: TaskId
}

impl Default for TaskList {
  fn default() -> Self {
    Self {
      tasks:   Vec::new(),
      next_id: FIRST_TASK_ID
    }
  }
}

impl TaskList {
  pub fn new() -> Self {
    Self::default()
  }

  /// Rebuilds a list from stored parts.
  /// The counter is raised above the
  /// largest stored id when it lags
  /// behind, so new ids stay unique.
  pub fn from_parts(
    tasks: Vec<Task>,
    next_id: TaskId
  ) -> Self {
    // A stored id at u64::MAX leaves
    // nothing to hand out; the counter
    // parks there and adds are refused.
    let floor = tasks
      .iter()
      .map(|task| task.id)
      .max()
      .map_or(FIRST_TASK_ID, |max| {
        max.checked_add(1).unwrap_or(max)
      });

    let next_id = if next_id < floor {
      tracing::warn!(
        stored_next_id = next_id,
        raised_to = floor,
        "stored id counter lags \
         behind stored tasks; raising \
         it"
      );
      floor
    } else {
      next_id
    };

    Self { tasks, next_id }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn next_id(&self) -> TaskId {
    self.next_id
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  /// Appends a pending task unless the
  /// trimmed text is empty. The text is
  /// stored as given.
  pub fn add_task(
    &mut self,
    text: &str
  ) -> Option<TaskId> {
    if text.trim().is_empty() {
      trace!(
        "ignoring add with blank text"
      );
      return None;
    }

    let id = self.next_id;
    let Some(next_id) = id.checked_add(1)
    else {
      tracing::warn!(
        next_id = id,
        "task id counter exhausted; \
         refusing add"
      );
      return None;
    };

    let mut tasks =
      Vec::with_capacity(
        self.tasks.len() + 1
      );
    tasks.extend(
      self.tasks.iter().cloned()
    );
    tasks.push(Task::new_pending(
      id,
      text.to_string()
    ));
    self.tasks = tasks;
    self.next_id = next_id;

    debug!(
      task_id = id,
      next_id = self.next_id,
      "added task"
    );
    Some(id)
  }

  /// Flips completion on the task with
  /// the given id. Returns false when no
  /// such task exists.
  pub fn toggle_task(
    &mut self,
    id: TaskId
  ) -> bool {
    if self.get(id).is_none() {
      trace!(
        task_id = id,
        "toggle on unknown task"
      );
      return false;
    }

    self.tasks = self
      .tasks
      .iter()
      .map(|task| {
        if task.id == id {
          Task {
            completed: !task.completed,
            ..task.clone()
          }
        } else {
          task.clone()
        }
      })
      .collect();

    debug!(task_id = id, "toggled task");
    true
  }

  pub fn delete_task(
    &mut self,
    id: TaskId
  ) -> bool {
    let before = self.tasks.len();
    self.tasks = self
      .tasks
      .iter()
      .filter(|task| task.id != id)
      .cloned()
      .collect();

    let removed =
      self.tasks.len() != before;
    if removed {
      debug!(
        task_id = id,
        "deleted task"
      );
    } else {
      trace!(
        task_id = id,
        "delete on unknown task"
      );
    }
    removed
  }

  /// Drops every completed task and
  /// returns how many were removed.
  pub fn clear_completed(
    &mut self
  ) -> usize {
    let before = self.tasks.len();
    self.tasks = self
      .tasks
      .iter()
      .filter(|task| task.is_pending())
      .cloned()
      .collect();

    let removed =
      before - self.tasks.len();
    debug!(
      removed,
      remaining = self.tasks.len(),
      "cleared completed tasks"
    );
    removed
  }

  pub fn pending(&self) -> Vec<Task> {
    pending_tasks(&self.tasks)
  }

  pub fn completed_count(
    &self
  ) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| task.completed)
      .count()
  }

  pub fn pending_count(&self) -> usize {
    self.tasks.len()
      - self.completed_count()
  }
}

pub fn pending_tasks(
  tasks: &[Task]
) -> Vec<Task> {
  tasks
    .iter()
    .filter(|task| task.is_pending())
    .cloned()
    .collect()
}
