pub mod display;
pub mod endpoint;
pub mod task_eval;
pub mod utc_millis;
