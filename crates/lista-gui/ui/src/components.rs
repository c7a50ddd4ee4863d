mod add_task_form;
mod carousel;
mod carousel_dots;
mod checklist;
mod checklist_footer;
mod icons;
mod page_footer;
mod page_header;
mod panel;
mod task_item;

pub use add_task_form::AddTaskForm;
pub use carousel::Carousel;
pub use carousel_dots::CarouselDots;
pub use checklist::Checklist;
pub use checklist_footer::ChecklistFooter;
pub use icons::{
  ChevronLeftIcon,
  ChevronRightIcon,
  PlusIcon,
  TrashIcon
};
pub use page_footer::PageFooter;
pub use page_header::PageHeader;
pub use panel::Panel;
pub use task_item::TaskItem;
