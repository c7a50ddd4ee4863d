use lista_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  AddTaskForm,
  ChecklistFooter,
  TaskItem
};

#[derive(Properties, PartialEq)]
pub struct ChecklistProps {
  pub tasks:              Vec<Task>,
  pub on_add:             Callback<String>,
  pub on_toggle:          Callback<TaskId>,
  pub on_delete:          Callback<TaskId>,
  pub on_clear_completed:
    Callback<MouseEvent>
}

#[function_component(Checklist)]
pub fn checklist(
  props: &ChecklistProps
) -> Html {
  let completed_count = props
    .tasks
    .iter()
    .filter(|task| task.completed)
    .count();
  let pending_count =
    props.tasks.len() - completed_count;

  html! {
      <div class="checklist">
          <AddTaskForm on_add={props.on_add.clone()} />

          <div class="task-rows">
              {
                  if props.tasks.is_empty() {
                      html! {
                          <p class="task-rows-empty">{ "Aún no hay tareas. ¡Añade una!" }</p>
                      }
                  } else {
                      html! {
                          <>
                              {
                                  for props.tasks.iter().cloned().map(|task| {
                                      let id = task.id;
                                      html! {
                                          <TaskItem
                                              key={id}
                                              task={task}
                                              on_toggle={props.on_toggle.clone()}
                                              on_delete={props.on_delete.clone()}
                                          />
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>

          <ChecklistFooter
              pending_count={pending_count}
              completed_count={completed_count}
              on_clear_completed={props.on_clear_completed.clone()}
          />
      </div>
  }
}
