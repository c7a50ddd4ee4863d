use lista_core::{
  CarouselCursor,
  Task
};
use yew::{
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

use super::{
  CarouselDots,
  ChevronLeftIcon,
  ChevronRightIcon
};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
  pub pending: Vec<Task>
}

#[function_component(Carousel)]
pub fn carousel(
  props: &CarouselProps
) -> Html {
  let cursor_state =
    use_state(CarouselCursor::new);
  let len = props.pending.len();

  // Stored cursor lags one render behind
  // a shrunken subset.
  let mut cursor = *cursor_state;
  cursor.sync(len);

  {
    let cursor_state =
      cursor_state.clone();
    use_effect_with(len, move |len| {
      let mut synced = *cursor_state;
      if synced.sync(*len) {
        cursor_state.set(synced);
      }
      || ()
    });
  }

  let Some(current) =
    props.pending.get(cursor.index())
  else {
    return html! {
        <div class="carousel">
            <div class="carousel-empty">
                <strong>{ "¡Felicidades!" }</strong>
                <p>{ "No tienes tareas pendientes." }</p>
            </div>
        </div>
    };
  };

  let on_previous = {
    let cursor_state =
      cursor_state.clone();
    move |_: MouseEvent| {
      let mut moved = cursor;
      moved.previous(len);
      cursor_state.set(moved);
    }
  };

  let on_next = {
    let cursor_state =
      cursor_state.clone();
    move |_: MouseEvent| {
      let mut moved = cursor;
      moved.next(len);
      cursor_state.set(moved);
    }
  };

  html! {
      <div class="carousel">
          <button class="carousel-nav prev" onclick={on_previous} aria-label="Tarea anterior">
              <ChevronLeftIcon />
          </button>

          <div
              key={format!("slide-{}-{}", cursor.index(), current.id)}
              class={classes!("carousel-slide", cursor.direction().as_class())}
          >
              { current.text.clone() }
          </div>

          <button class="carousel-nav next" onclick={on_next} aria-label="Siguiente tarea">
              <ChevronRightIcon />
          </button>

          <CarouselDots count={len} cursor={cursor} />
      </div>
  }
}
