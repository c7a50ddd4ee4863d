use lista_core::carousel::CarouselCursor;
use lista_core::config::{
  AppConfig,
  StorageKeys
};
use lista_core::session::Session;
use lista_core::store::MemorySlots;
use lista_core::task::Task;

#[test]
fn session_survives_reload() {
  let mut slots = MemorySlots::new();

  {
    let mut session = Session::load(
      &mut slots,
      StorageKeys::default()
    );
    session.add_task("Buy milk").expect("add");
    session.add_task("Walk dog").expect("add");
    session.add_task("Pay rent").expect("add");
    session.toggle_task(2).expect("toggle");
    session.delete_task(1).expect("delete");
  }

  let reloaded = Session::load(
    &mut slots,
    StorageKeys::default()
  );
  assert_eq!(
    reloaded.list().tasks(),
    &[
      Task {
        id:        2,
        text:      "Walk dog".to_string(),
        completed: true
      },
      Task {
        id:        3,
        text:      "Pay rent".to_string(),
        completed: false
      },
    ]
  );
  assert_eq!(reloaded.list().next_id(), 4);
  assert_eq!(
    reloaded.list().pending_count(),
    1
  );
}

#[test]
fn corrupt_slots_load_as_empty_session() {
  let mut slots = MemorySlots::new();
  slots.insert_raw("tasks", "not json");
  slots.insert_raw("nextId", "{}");

  let session = Session::load(
    slots,
    StorageKeys::default()
  );
  assert!(session.list().is_empty());
  assert_eq!(session.list().next_id(), 1);
}

#[test]
fn corrupt_counter_does_not_reuse_ids() {
  let mut slots = MemorySlots::new();
  slots.insert_raw(
    "tasks",
    r#"[{"id":4,"text":"a","completed":false},{"id":9,"text":"b","completed":true}]"#
  );
  slots.insert_raw("nextId", "oops");

  let mut session = Session::load(
    slots,
    StorageKeys::default()
  );
  assert_eq!(
    session.add_task("c").expect("add"),
    Some(10)
  );
}

#[test]
fn exhausted_counter_never_repeats_an_id()
{
  let mut slots = MemorySlots::new();
  slots.insert_raw(
    "tasks",
    r#"[{"id":7,"text":"a","completed":false}]"#
  );
  slots.insert_raw(
    "nextId",
    &u64::MAX.to_string()
  );

  let mut session = Session::load(
    slots,
    StorageKeys::default()
  );
  let first =
    session.add_task("b").expect("add");
  let second =
    session.add_task("c").expect("add");
  assert_eq!(first, None);
  assert_eq!(second, None);
  assert_eq!(session.list().len(), 1);
  assert_eq!(
    session.store().raw("nextId"),
    Some(u64::MAX.to_string().as_str())
  );
}

#[test]
fn carousel_follows_pending_subset() {
  let config = AppConfig::default();
  let mut session = Session::load(
    MemorySlots::new(),
    config.storage.clone()
  );
  for text in ["one", "two", "three"] {
    session.add_task(text).expect("add");
  }

  let mut cursor = CarouselCursor::new();
  cursor.previous(
    session.list().pending().len()
  );
  assert_eq!(cursor.index(), 2);
  assert_eq!(
    session.list().pending()[cursor.index()]
      .text,
    "three"
  );

  session.toggle_task(3).expect("toggle");
  let pending = session.list().pending();
  cursor.sync(pending.len());
  assert_eq!(cursor.index(), 1);
  assert_eq!(
    pending[cursor.index()].text,
    "two"
  );

  session.toggle_task(1).expect("toggle");
  session.toggle_task(2).expect("toggle");
  cursor.sync(
    session.list().pending().len()
  );
  assert_eq!(cursor.index(), 0);

  assert_eq!(
    session.clear_completed().expect("clear"),
    3
  );
  assert!(session.list().is_empty());
  assert_eq!(
    session.store().raw("tasks"),
    Some("[]")
  );
  assert_eq!(
    session.store().raw("nextId"),
    Some("4")
  );
}
