mod guidance;
mod plan;
mod recipes;
mod shopping;

pub use guidance::{guidance, ingredient};
pub use plan::plan;
pub use recipes::{RecipesArgs, recipes};
pub use shopping::shopping;

use std::io::Write;

use serde::Serialize;

pub(crate) fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;

    Ok(())
}
