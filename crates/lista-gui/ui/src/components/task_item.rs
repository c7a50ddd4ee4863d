use lista_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Event,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::TrashIcon;

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let id = props.task.id;
  let text_id = format!("task-text-{id}");
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <div class="task-row">
          <div class="task-row-main">
              <input
                  type="checkbox"
                  checked={props.task.completed}
                  onchange={move |_: Event| on_toggle.emit(id)}
                  aria-labelledby={text_id.clone()}
              />
              <span
                  id={text_id}
                  class={classes!("task-text", props.task.completed.then_some("done"))}
              >
                  { props.task.text.clone() }
              </span>
          </div>
          <button
              class="task-delete"
              onclick={move |_: MouseEvent| on_delete.emit(id)}
              aria-label={format!("Eliminar tarea {}", props.task.text)}
          >
              <TrashIcon />
          </button>
      </div>
  }
}
