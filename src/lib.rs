pub mod catalog;
pub mod cli;
pub mod collect;
pub mod parser;
pub mod transform;

pub use cli::Cli;
pub use collect::{collect_all, collect_resource, DataDir, SourceClient};
