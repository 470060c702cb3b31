#![allow(dead_code)]

use littlespoon::{Config, Session};
use littlespoon_mealplan::FixedClock;
use time::{Date, macros::date};

/// Wednesday of the planned week.
pub const TODAY: Date = date!(2026 - 10 - 21);

pub fn session(config: &Config) -> anyhow::Result<Session> {
    Session::with_clock(config, &FixedClock(TODAY))
}

pub fn render(
    f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
) -> anyhow::Result<String> {
    let mut out = Vec::new();
    f(&mut out)?;

    Ok(String::from_utf8(out)?)
}
