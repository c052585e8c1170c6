pub mod fetch_task;
pub mod submit_task;

pub use fetch_task::FetchTaskUseCase;
pub use submit_task::{SubmitTaskInput, SubmitTaskUseCase};
