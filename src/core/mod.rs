pub mod carousel;
pub mod constants;
pub mod flight;
pub mod loader;
pub mod tween;

pub use carousel::*;
pub use constants::*;
pub use flight::*;
pub use loader::*;
pub use tween::*;
