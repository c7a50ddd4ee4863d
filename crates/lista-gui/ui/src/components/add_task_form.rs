use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use super::PlusIcon;

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
  pub on_add: Callback<String>
}

#[function_component(AddTaskForm)]
pub fn add_task_form(
  props: &AddTaskFormProps
) -> Html {
  let draft = use_state(String::new);
  let blank = draft.trim().is_empty();

  let on_input = {
    let draft = draft.clone();
    move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    }
  };

  let on_submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    move |e: SubmitEvent| {
      e.prevent_default();
      on_add.emit((*draft).clone());
      draft.set(String::new());
    }
  };

  html! {
      <form class="add-task" onsubmit={on_submit}>
          <input
              type="text"
              value={(*draft).clone()}
              oninput={on_input}
              placeholder="Añadir una nueva tarea..."
          />
          <button type="submit" disabled={blank} aria-label="Añadir tarea">
              <PlusIcon />
          </button>
      </form>
  }
}
