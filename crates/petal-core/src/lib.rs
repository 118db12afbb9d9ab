pub mod constants;
pub mod error;
pub mod field;
pub mod permission;
pub mod render;
pub mod scene;
pub mod step;
pub mod tilt;
pub mod viewport;

pub static PETAL_WGSL: &str = include_str!("../shaders/petal.wgsl");

pub use constants::*;
pub use error::*;
pub use field::*;
pub use permission::*;
pub use render::*;
pub use scene::*;
pub use step::*;
pub use tilt::*;
pub use viewport::*;
