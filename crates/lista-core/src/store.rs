use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  error,
  warn
};

/// Raw string slots keyed by name.
/// Implementations decide where the
/// strings live; (de)serialization
/// happens in [`read_slot`] and
/// [`write_slot`].
pub trait SlotStore {
  fn get_slot(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_slot(
    &mut self,
    key: &str,
    raw: &str
  ) -> anyhow::Result<()>;
}

impl<S: SlotStore + ?Sized> SlotStore
  for &mut S
{
  fn get_slot(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    (**self).get_slot(key)
  }

  fn set_slot(
    &mut self,
    key: &str,
    raw: &str
  ) -> anyhow::Result<()> {
    (**self).set_slot(key, raw)
  }
}

/// Reads and decodes a slot, falling
/// back to `default` when the slot is
/// absent, unreadable, or holds
/// something that does not parse.
#[tracing::instrument(skip(
  store, default
))]
pub fn read_slot<S, T>(
  store: &S,
  key: &str,
  default: T
) -> T
where
  S: SlotStore + ?Sized,
  T: DeserializeOwned
{
  let raw = match store.get_slot(key) {
    | Ok(Some(raw)) => raw,
    | Ok(None) => {
      debug!(
        key,
        "slot absent; using default"
      );
      return default;
    }
    | Err(err) => {
      warn!(
        key,
        error = %format!("{err:#}"),
        "failed reading slot; using \
         default"
      );
      return default;
    }
  };

  match serde_json::from_str::<T>(&raw) {
    | Ok(value) => {
      debug!(
        key,
        bytes = raw.len(),
        "loaded slot"
      );
      value
    }
    | Err(err) => {
      error!(
        key,
        error = %err,
        "failed parsing slot; using \
         default"
      );
      default
    }
  }
}

#[tracing::instrument(skip(
  store, value
))]
pub fn write_slot<S, T>(
  store: &mut S,
  key: &str,
  value: &T
) -> anyhow::Result<()>
where
  S: SlotStore + ?Sized,
  T: Serialize + ?Sized
{
  let raw = serde_json::to_string(value)
    .with_context(|| {
      format!(
        "failed to serialize slot {key}"
      )
    })?;
  store
    .set_slot(key, &raw)
    .with_context(|| {
      format!(
        "failed to write slot {key}"
      )
    })?;
  debug!(
    key,
    bytes = raw.len(),
    "saved slot"
  );
  Ok(())
}

/// In-process slots, used by tests and
/// native callers.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
  slots: BTreeMap<String, String>
}

impl MemorySlots {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<&str> {
    self
      .slots
      .get(key)
      .map(String::as_str)
  }

  pub fn insert_raw(
    &mut self,
    key: &str,
    raw: &str
  ) {
    self
      .slots
      .insert(key.to_string(), raw.to_string());
  }
}

impl SlotStore for MemorySlots {
  fn get_slot(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.slots.get(key).cloned())
  }

  fn set_slot(
    &mut self,
    key: &str,
    raw: &str
  ) -> anyhow::Result<()> {
    self.insert_raw(key, raw);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use anyhow::anyhow;

  use super::*;
  use crate::task::Task;

  struct BrokenSlots;

  impl SlotStore for BrokenSlots {
    fn get_slot(
      &self,
      _key: &str
    ) -> anyhow::Result<Option<String>>
    {
      Err(anyhow!("storage disabled"))
    }

    fn set_slot(
      &mut self,
      _key: &str,
      _raw: &str
    ) -> anyhow::Result<()> {
      Err(anyhow!("quota exceeded"))
    }
  }

  #[test]
  fn absent_slot_reads_default() {
    let store = MemorySlots::new();
    assert_eq!(
      read_slot(&store, "nextId", 1_u64),
      1
    );
  }

  #[test]
  fn malformed_slot_reads_default() {
    let mut store = MemorySlots::new();
    store.insert_raw("tasks", "[{\"id\":1,");
    store.insert_raw("nextId", "\"seven\"");

    let tasks: Vec<Task> =
      read_slot(&store, "tasks", Vec::new());
    assert!(tasks.is_empty());
    assert_eq!(
      read_slot(&store, "nextId", 1_u64),
      1
    );
  }

  #[test]
  fn unreadable_store_reads_default() {
    let store = BrokenSlots;
    assert_eq!(
      read_slot(&store, "nextId", 5_u64),
      5
    );
  }

  #[test]
  fn written_slot_reads_back() {
    let mut store = MemorySlots::new();
    let tasks = vec![Task::new_pending(
      1,
      "Buy milk".to_string()
    )];
    write_slot(&mut store, "tasks", &tasks)
      .unwrap();

    assert_eq!(
      store.raw("tasks"),
      Some(
        r#"[{"id":1,"text":"Buy milk","completed":false}]"#
      )
    );
    let loaded: Vec<Task> =
      read_slot(&store, "tasks", Vec::new());
    assert_eq!(loaded, tasks);
  }

  #[test]
  fn write_failure_names_the_slot() {
    let mut store = BrokenSlots;
    let err =
      write_slot(&mut store, "nextId", &2_u64)
        .unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("nextId"));
    assert!(
      rendered.contains("quota exceeded")
    );
  }
}
