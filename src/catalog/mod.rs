pub mod resources;
pub mod types;

pub use resources::*;
pub use types::*;
