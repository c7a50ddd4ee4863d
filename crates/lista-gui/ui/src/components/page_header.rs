use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
  pub title:   AttrValue,
  pub tagline: AttrValue
}

#[function_component(PageHeader)]
pub fn page_header(
  props: &PageHeaderProps
) -> Html {
  html! {
      <header class="page-header">
          <h1 class="page-title">{ props.title.clone() }</h1>
          <p class="page-tagline">{ props.tagline.clone() }</p>
      </header>
  }
}
