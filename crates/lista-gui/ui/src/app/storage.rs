use anyhow::anyhow;
use lista_core::store::SlotStore;
use wasm_bindgen::JsValue;

/// Slots kept in `window.localStorage`.
///
/// The storage area is looked up on every
/// call, so a profile with storage
/// disabled reads as empty and fails on
/// write.
#[derive(Debug, Default)]
pub struct LocalStorageSlots;

impl LocalStorageSlots {
  pub fn new() -> Self {
    Self
  }
}

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

fn js_error(
  call: &str,
  value: JsValue
) -> anyhow::Error {
  anyhow!(
    "localStorage.{call} failed: \
     {value:?}"
  )
}

impl SlotStore for LocalStorageSlots {
  fn get_slot(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    let Some(storage) = local_storage()
    else {
      tracing::warn!(
        key,
        "local storage unavailable"
      );
      return Ok(None);
    };

    storage
      .get_item(key)
      .map_err(|value| {
        js_error("getItem", value)
      })
  }

  fn set_slot(
    &mut self,
    key: &str,
    raw: &str
  ) -> anyhow::Result<()> {
    let storage = local_storage()
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })?;

    storage
      .set_item(key, raw)
      .map_err(|value| {
        js_error("setItem", value)
      })
  }
}
