use lista_core::CarouselCursor;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CarouselDotsProps {
  pub count:  usize,
  pub cursor: CarouselCursor
}

#[function_component(CarouselDots)]
pub fn carousel_dots(
  props: &CarouselDotsProps
) -> Html {
  if props.count == 0 {
    return html! {};
  }

  html! {
      <div class="carousel-dots">
          {
              for (0..props.count).map(|position| html! {
                  <div
                      key={position}
                      class={classes!(
                          "carousel-dot",
                          props.cursor.is_current(position).then_some("current")
                      )}
                  ></div>
              })
          }
      </div>
  }
}
