use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ChecklistFooterProps {
  pub pending_count:      usize,
  pub completed_count:    usize,
  pub on_clear_completed:
    Callback<MouseEvent>
}

#[function_component(ChecklistFooter)]
pub fn checklist_footer(
  props: &ChecklistFooterProps
) -> Html {
  html! {
      <div class="checklist-footer">
          <span>{ format!("{} Tareas pendientes", props.pending_count) }</span>
          <button
              class="clear-completed"
              onclick={props.on_clear_completed.clone()}
              disabled={props.completed_count == 0}
          >
              { "Limpiar completadas" }
          </button>
      </div>
  }
}
