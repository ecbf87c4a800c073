pub mod config;
pub mod descriptor;
pub mod event;
pub mod state;
pub mod stats;

pub use config::*;
pub use descriptor::*;
pub use event::*;
pub use state::*;
pub use stats::*;
