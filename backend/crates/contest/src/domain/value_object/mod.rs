pub mod category;
pub mod contest_id;
pub mod contest_status;
pub mod draft;
pub mod money;
