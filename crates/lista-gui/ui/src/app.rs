mod storage;

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use gloo::console::log;
use lista_core::state::pending_tasks;
use lista_core::{
  AppConfig,
  Session,
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use self::storage::LocalStorageSlots;
use crate::components::{
  Carousel,
  Checklist,
  PageFooter,
  PageHeader,
  Panel
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/lista.toml");

type SharedSession =
  Rc<RefCell<Session<LocalStorageSlots>>>;

fn load_app_config() -> AppConfig {
  match AppConfig::from_toml_str(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed parsing app config; \
         using defaults"
      );
      AppConfig::default()
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_app_config);
  let session: SharedSession = {
    let keys = config.storage.clone();
    use_mut_ref(move || {
      Session::load(
        LocalStorageSlots::new(),
        keys
      )
    })
  };
  let revision = use_state(|| 0_u64);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and session \
         loaded"
      );
      || ()
    });
  }

  let tasks: Vec<Task> = session
    .borrow()
    .list()
    .tasks()
    .to_vec();
  let pending = pending_tasks(&tasks);

  let on_add = {
    let session = session.clone();
    let revision = revision.clone();
    Callback::from(move |text: String| {
      let result =
        session.borrow_mut().add_task(&text);
      settle("task.add", result, &revision);
    })
  };

  let on_toggle = {
    let session = session.clone();
    let revision = revision.clone();
    Callback::from(move |id: TaskId| {
      let result =
        session.borrow_mut().toggle_task(id);
      settle(
        "task.toggle",
        result,
        &revision
      );
    })
  };

  let on_delete = {
    let session = session.clone();
    let revision = revision.clone();
    Callback::from(move |id: TaskId| {
      let result =
        session.borrow_mut().delete_task(id);
      settle(
        "task.delete",
        result,
        &revision
      );
    })
  };

  let on_clear_completed = {
    let session = session.clone();
    let revision = revision.clone();
    Callback::from(move |_: MouseEvent| {
      let result = session
        .borrow_mut()
        .clear_completed();
      settle(
        "task.clear_completed",
        result,
        &revision
      );
    })
  };

  let page = &config.page;

  html! {
      <div class="page">
          <PageHeader title={page.title.clone()} tagline={page.tagline.clone()} />
          <main class="page-main">
              <Panel title="Tareas Pendientes">
                  <Carousel pending={pending} />
              </Panel>
              <Panel title="Gestionar Tareas">
                  <Checklist
                      tasks={tasks}
                      on_add={on_add}
                      on_toggle={on_toggle}
                      on_delete={on_delete}
                      on_clear_completed={on_clear_completed}
                  />
              </Panel>
          </main>
          <PageFooter text={page.footer.clone()} />
      </div>
  }
}

/// Logs the outcome of a session
/// operation and schedules a re-render.
/// Storage write errors stop here; the
/// in-memory list already holds the
/// change.
fn settle<T: Debug>(
  action: &str,
  result: anyhow::Result<T>,
  revision: &UseStateHandle<u64>
) {
  match result {
    | Ok(outcome) => {
      ui_debug(
        action,
        &format!("{outcome:?}")
      );
    }
    | Err(error) => {
      tracing::error!(
        action,
        error = %format!("{error:#}"),
        "failed persisting tasks"
      );
    }
  }
  revision.set(
    (**revision).wrapping_add(1)
  );
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_config_parses_with_default_keys(
  ) {
    let config = AppConfig::from_toml_str(
      APP_CONFIG_TOML
    )
    .expect("bundled lista.toml parses");
    assert_eq!(
      config.storage.tasks_key,
      "tasks"
    );
    assert_eq!(
      config.storage.next_id_key,
      "nextId"
    );
    assert_eq!(
      config.page.title,
      "Lista de Tareas"
    );
  }

  #[test]
  fn loader_matches_bundled_config() {
    assert_eq!(
      load_app_config(),
      AppConfig::from_toml_str(
        APP_CONFIG_TOML
      )
      .expect("bundled lista.toml parses")
    );
  }
}
