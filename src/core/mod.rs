pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod fade;
pub mod layer;
pub mod motion;
pub mod mount;
pub mod tilt;

pub use compose::*;
pub use config::PageConfig;
pub use error::*;
pub use fade::*;
pub use layer::*;
pub use motion::*;
pub use mount::MountSlot;
pub use tilt::*;
