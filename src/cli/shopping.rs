use std::io::Write;

use littlespoon_shopping::aggregate;

use crate::planner::Session;

pub fn shopping(session: &Session, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let list = aggregate(session.state().weekly_plan());

    if json {
        return super::write_json(out, &list);
    }

    if list.is_empty() {
        writeln!(out, "Nothing planned this week, the shopping list is empty.")?;
        return Ok(());
    }

    for (category, items) in list.iter() {
        writeln!(out, "{category}")?;

        for item in items {
            writeln!(
                out,
                "  - {} ({}) for {}, {} {}",
                item.ingredient.name,
                item.ingredient.amount,
                item.recipe_title,
                item.date.weekday(),
                item.meal_type
            )?;
        }
    }

    Ok(())
}
