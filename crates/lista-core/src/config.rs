use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  info,
  warn
};

pub const DEFAULT_TASKS_KEY: &str =
  "tasks";
pub const DEFAULT_NEXT_ID_KEY: &str =
  "nextId";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct AppConfig {
  #[serde(default = "default_version")]
  pub version: u32,
  #[serde(default)]
  pub storage: StorageKeys,
  #[serde(default)]
  pub page:    PageText
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct StorageKeys {
  #[serde(
    default = "default_tasks_key"
  )]
  pub tasks_key:   String,
  #[serde(
    default = "default_next_id_key"
  )]
  pub next_id_key: String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct PageText {
  #[serde(default = "default_title")]
  pub title:   String,
  #[serde(default = "default_tagline")]
  pub tagline: String,
  #[serde(default = "default_footer")]
  pub footer:  String
}

fn default_version() -> u32 {
  1
}

fn default_tasks_key() -> String {
  DEFAULT_TASKS_KEY.to_string()
}

fn default_next_id_key() -> String {
  DEFAULT_NEXT_ID_KEY.to_string()
}

fn default_title() -> String {
  "Lista de Tareas".to_string()
}

fn default_tagline() -> String {
  "Organiza tu día, una tarea a la \
   vez."
    .to_string()
}

fn default_footer() -> String {
  "Creado con Rust, Yew y \
   WebAssembly."
    .to_string()
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      version: default_version(),
      storage: StorageKeys::default(),
      page:    PageText::default()
    }
  }
}

impl Default for StorageKeys {
  fn default() -> Self {
    Self {
      tasks_key:   default_tasks_key(),
      next_id_key: default_next_id_key()
    }
  }
}

impl Default for PageText {
  fn default() -> Self {
    Self {
      title:   default_title(),
      tagline: default_tagline(),
      footer:  default_footer()
    }
  }
}

impl AppConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<AppConfig>(text)
        .context(
          "failed to parse app config"
        )?;
    config.sanitize();

    info!(
      version = config.version,
      tasks_key = %config.storage.tasks_key,
      next_id_key = %config.storage.next_id_key,
      "loaded app config"
    );
    Ok(config)
  }

  fn sanitize(&mut self) {
    let storage = &mut self.storage;
    storage.tasks_key =
      storage.tasks_key.trim().to_string();
    storage.next_id_key = storage
      .next_id_key
      .trim()
      .to_string();

    if storage.tasks_key.is_empty() {
      warn!(
        "blank tasks key; using default"
      );
      storage.tasks_key =
        default_tasks_key();
    }
    if storage.next_id_key.is_empty() {
      warn!(
        "blank next id key; using \
         default"
      );
      storage.next_id_key =
        default_next_id_key();
    }
    if storage.tasks_key
      == storage.next_id_key
    {
      warn!(
        key = %storage.tasks_key,
        "tasks and next id share a \
         slot; using default keys"
      );
      *storage = StorageKeys::default();
    }

    if self.page.title.trim().is_empty()
    {
      self.page.title = default_title();
    }
  }
}
