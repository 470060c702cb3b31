mod catalog;
mod command;
mod favorite;
mod query;
mod seed;
mod types;

pub use catalog::*;
pub use command::*;
pub use favorite::*;
pub use query::*;
pub use types::*;
