pub mod constants;
pub mod projection;
pub mod scene;
pub mod state;

pub use constants::*;
pub use projection::*;
pub use scene::*;
pub use state::*;
