mod command;
mod sample;
mod service;
mod slot;
mod state;
mod store;
mod week;

pub use command::*;
pub use sample::*;
pub use service::*;
pub use slot::*;
pub use state::*;
pub use store::*;
pub use week::*;
