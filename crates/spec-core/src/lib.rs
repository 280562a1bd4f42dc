pub mod allocator;
pub mod command;
pub mod config;
pub mod creator;
pub mod error;
pub mod io;
pub mod lookup;
pub mod paths;
pub mod report;
pub mod slug;
pub mod template;
pub mod types;

pub use error::{Result, SpecError};
