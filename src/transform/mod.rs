pub mod hooks;
pub mod reduce;
pub mod text;

pub use hooks::*;
pub use reduce::*;
pub use text::*;
