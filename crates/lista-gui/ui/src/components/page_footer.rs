use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PageFooterProps {
  pub text: AttrValue
}

#[function_component(PageFooter)]
pub fn page_footer(
  props: &PageFooterProps
) -> Html {
  html! {
      <footer class="page-footer">
          <p>{ props.text.clone() }</p>
      </footer>
  }
}
