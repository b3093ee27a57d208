pub mod capability;
pub mod config;
pub mod constants;
pub mod distribution;
pub mod easing;
pub mod field;
pub mod gpu;
pub mod inputs;
pub mod layout;
pub mod particle;
#[cfg(feature = "gpu")]
pub mod renderer;
pub mod scroll;
pub mod state;

pub use capability::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use gpu::*;
pub use inputs::*;
pub use particle::*;
pub use scroll::*;
pub use state::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
