use std::io::Write;

use crate::planner::Session;

/// Prints the week, one block per day with slots in time order.
pub fn plan(session: &Session, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let state = session.state();

    if json {
        return super::write_json(out, state.weekly_plan());
    }

    writeln!(
        out,
        "Week of {} for {} ({} months)",
        state.weekly_plan().start(),
        state.baby().name(),
        state.baby().months_old()
    )?;

    for day in state.weekly_plan() {
        let marker = if day.date == session.today { " (today)" } else { "" };
        writeln!(
            out,
            "\n{} {}{}  [{}/4 done]",
            day.date.weekday(),
            day.date,
            marker,
            day.completed_count()
        )?;

        for (meal_type, slot) in day.timeline() {
            let done = if slot.completed { "x" } else { " " };
            let title = slot
                .recipe
                .as_ref()
                .map(|recipe| recipe.title.as_str())
                .unwrap_or("-");

            writeln!(
                out,
                "  [{done}] {} {:<9} {title}",
                slot.scheduled_time,
                meal_type.as_ref()
            )?;
        }
    }

    Ok(())
}
