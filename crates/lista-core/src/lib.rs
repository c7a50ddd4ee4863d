pub mod carousel;
pub mod config;
pub mod session;
pub mod state;
pub mod store;
pub mod task;

pub use carousel::{
  CarouselCursor,
  SlideDirection
};
pub use config::{
  AppConfig,
  StorageKeys
};
pub use session::Session;
pub use state::TaskList;
pub use store::{
  MemorySlots,
  SlotStore
};
pub use task::{
  Task,
  TaskId
};
