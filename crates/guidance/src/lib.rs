mod guidebook;
mod ingredient;
mod milestone;
mod seed;
mod stage;

pub use guidebook::*;
pub use ingredient::*;
pub use milestone::*;
pub use stage::*;
