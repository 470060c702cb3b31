use std::io::Write;

use clap::Args;
use littlespoon_recipe::RecipeQuery;
use littlespoon_shared::{AgeBand, MealType};

use crate::planner::Session;

#[derive(Args, Debug, Default, Clone)]
pub struct RecipesArgs {
    /// Text to look for in titles and ingredient names
    #[arg(long)]
    pub search: Option<String>,

    /// Age band, e.g. `6-8`
    #[arg(long)]
    pub age: Option<AgeBand>,

    /// Breakfast, Lunch, Dinner or Snack
    #[arg(long)]
    pub meal_type: Option<MealType>,

    /// Only favorited recipes
    #[arg(long)]
    pub favorites: bool,

    /// Leave out recipes mentioning this allergen (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,
}

impl From<RecipesArgs> for RecipeQuery {
    fn from(args: RecipesArgs) -> Self {
        let mut query = RecipeQuery::new().favorites_only(args.favorites);
        query.text = args.search;
        query.age_band = args.age;
        query.meal_type = args.meal_type;

        args
            .exclude
            .into_iter()
            .fold(query, |query, term| query.exclude(term))
    }
}

pub fn recipes(
    session: &Session,
    args: RecipesArgs,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let state = session.state();
    let found = state.search(&args.into());

    if json {
        return super::write_json(out, &found);
    }

    if found.is_empty() {
        writeln!(out, "No recipes found.")?;
        return Ok(());
    }

    for recipe in found {
        let favorite = if state.is_favorite(&recipe.id) { "*" } else { " " };
        writeln!(
            out,
            "{favorite} {:<28} {:<9} {:<5} {}",
            recipe.title,
            recipe.meal_type.as_ref(),
            recipe.starting_age_badge().unwrap_or_default(),
            recipe.prep_time
        )?;
    }

    Ok(())
}
