pub mod draft;
pub mod search;
pub mod service;
pub mod view;

pub use draft::{
    PreparedTask, TaskDraft, parse_task_date, parse_task_id, resolve_task_date, validate_draft,
};
pub use search::TaskSearch;
pub use service::{
    CompletionOutcome, complete_task, completion_outcome, create_task, delete_task, get_task,
    list_tasks, update_task,
};
pub use view::TaskView;
