pub mod assets;
pub mod camera;
pub mod config;
pub mod constants;
pub mod curve;
pub mod ease;
pub mod material;
pub mod mouse;
pub mod scene;
pub mod timeline;
pub mod tube;
pub mod viewport;

pub use assets::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use curve::*;
pub use ease::*;
pub use material::*;
pub use mouse::*;
pub use scene::*;
pub use timeline::*;
pub use tube::*;
pub use viewport::*;
