use std::io::Write;

use littlespoon_guidance::Guidebook;
use littlespoon_shared::AgeBand;
use serde::Serialize;

use crate::planner::Session;

#[derive(Serialize)]
struct GuidanceView<'a> {
    age_months: i32,
    band: AgeBand,
    stage: Option<&'a littlespoon_guidance::DevelopmentStage>,
    next_milestone: Option<&'a littlespoon_guidance::Milestone>,
    progress: u32,
}

/// Development stage and milestone progress for `age` months, the baby's
/// age when not given.
pub fn guidance(
    session: &Session,
    book: &Guidebook,
    age: Option<i32>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let age_months = age.unwrap_or_else(|| session.state().baby().months_old());

    let view = GuidanceView {
        age_months,
        band: AgeBand::resolve(age_months)?,
        stage: book.stage_for(age_months)?,
        next_milestone: book.next_milestone(age_months)?,
        progress: book.progress(age_months)?,
    };

    if json {
        return super::write_json(out, &view);
    }

    writeln!(out, "{} months ({})", view.age_months, view.band)?;

    if let Some(stage) = view.stage {
        writeln!(out, "\n{}", stage.title)?;
        writeln!(out, "  Foods to try:   {}", stage.foods_to_try.join(", "))?;
        writeln!(out, "  Foods to avoid: {}", stage.foods_to_avoid.join(", "))?;
        writeln!(out, "  Skills:         {}", stage.skills.join(", "))?;
        writeln!(out, "  Tip: {}", stage.tips)?;
    }

    if let Some(next) = view.next_milestone {
        writeln!(
            out,
            "\nNext milestone: {} at {} months ({}% there)",
            next.title, next.month, view.progress
        )?;
    }

    for (milestone, unlocked) in book.milestone_status(age_months)? {
        let mark = if unlocked { "x" } else { " " };
        writeln!(out, "  [{mark}] {:>2}m {}", milestone.month, milestone.title)?;
    }

    Ok(())
}

/// Preparation advice for matching ingredients at the baby's age.
pub fn ingredient(
    session: &Session,
    book: &Guidebook,
    query: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let age_months = session.state().baby().months_old();
    let guides = book.search_ingredients(query);

    if json {
        return super::write_json(out, &guides);
    }

    if guides.is_empty() {
        writeln!(out, "No ingredient guide matches `{query}`.")?;
        return Ok(());
    }

    for guide in guides {
        writeln!(out, "{} ({})", guide.name, guide.category)?;
        writeln!(out, "  At {age_months} months: {}", guide.preparation_for(age_months)?)?;
        writeln!(out, "  Choking hazards: {}", guide.choking_hazards)?;
        writeln!(out, "  Nutrition: {}", guide.nutrition)?;
    }

    Ok(())
}
