pub mod blog;
pub mod constants;
pub mod content;
pub mod scene;

pub use constants::*;
pub use scene::*;
