pub mod collection;
pub mod config;
pub mod date;
pub mod sort;
pub mod task;

pub use collection::*;
pub use config::*;
pub use date::*;
pub use sort::*;
pub use task::*;
