pub mod count;
pub mod stats;
pub mod style;
pub mod thread_cache;
pub mod validate;
