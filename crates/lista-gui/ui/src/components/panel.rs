use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PanelProps {
  pub title:    AttrValue,
  #[prop_or_default]
  pub children: Html
}

#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
  html! {
      <section>
          <h2 class="panel-title">{ props.title.clone() }</h2>
          <div class="panel-frame">
              { props.children.clone() }
          </div>
      </section>
  }
}
