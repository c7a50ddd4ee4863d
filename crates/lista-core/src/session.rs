use anyhow::Context;
use tracing::{
  debug,
  info
};

use crate::config::StorageKeys;
use crate::state::TaskList;
use crate::store::{
  SlotStore,
  read_slot,
  write_slot
};
use crate::task::{
  FIRST_TASK_ID,
  Task,
  TaskId
};

/// A task list bound to the slots it
/// was loaded from. Every mutation that
/// changes the list is followed by a
/// commit of the full state.
#[derive(Debug)]
pub struct Session<S> {
  store: S,
  keys:  StorageKeys,
  list:  TaskList
}

impl<S: SlotStore> Session<S> {
  #[tracing::instrument(skip(store))]
  pub fn load(
    store: S,
    keys: StorageKeys
  ) -> Self {
    let tasks: Vec<Task> = read_slot(
      &store,
      &keys.tasks_key,
      Vec::new()
    );
    let next_id: TaskId = read_slot(
      &store,
      &keys.next_id_key,
      FIRST_TASK_ID
    );
    let list =
      TaskList::from_parts(tasks, next_id);

    info!(
      tasks = list.len(),
      pending = list.pending_count(),
      next_id = list.next_id(),
      "loaded task session"
    );

    Self { store, keys, list }
  }

  pub fn list(&self) -> &TaskList {
    &self.list
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn into_store(self) -> S {
    self.store
  }

  pub fn add_task(
    &mut self,
    text: &str
  ) -> anyhow::Result<Option<TaskId>> {
    let id = self.list.add_task(text);
    if id.is_some() {
      self.commit()?;
    }
    Ok(id)
  }

  pub fn toggle_task(
    &mut self,
    id: TaskId
  ) -> anyhow::Result<bool> {
    let changed =
      self.list.toggle_task(id);
    if changed {
      self.commit()?;
    }
    Ok(changed)
  }

  pub fn delete_task(
    &mut self,
    id: TaskId
  ) -> anyhow::Result<bool> {
    let changed =
      self.list.delete_task(id);
    if changed {
      self.commit()?;
    }
    Ok(changed)
  }

  pub fn clear_completed(
    &mut self
  ) -> anyhow::Result<usize> {
    let removed =
      self.list.clear_completed();
    if removed > 0 {
      self.commit()?;
    }
    Ok(removed)
  }

  /// Writes the task sequence and the id
  /// counter to their slots.
  #[tracing::instrument(skip(self), fields(tasks = self.list.len(), next_id = self.list.next_id()))]
  pub fn commit(
    &mut self
  ) -> anyhow::Result<()> {
    write_slot(
      &mut self.store,
      &self.keys.tasks_key,
      self.list.tasks()
    )
    .context(
      "failed to persist task list"
    )?;
    write_slot(
      &mut self.store,
      &self.keys.next_id_key,
      &self.list.next_id()
    )
    .context(
      "failed to persist id counter"
    )?;
    debug!("committed task session");
    Ok(())
  }
}
