use anyhow::Result;
use clap::{Parser, Subcommand};
use littlespoon::cli::{RecipesArgs, guidance, ingredient, plan, recipes, shopping};
use littlespoon_guidance::Guidebook;

/// littlespoon - Weekly meal planning for little ones
#[derive(Parser)]
#[command(name = "littlespoon")]
#[command(about = "Weekly meal plan, shopping list and feeding guidance for babies", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this week's meal plan
    Plan,
    /// Show the shopping list for the planned meals
    Shopping,
    /// Search the recipe bank
    Recipes(RecipesArgs),
    /// Development stage and next milestone
    Guidance {
        /// Age in months (defaults to the configured baby age)
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i32>,
    },
    /// How to prepare an ingredient at the baby's age
    Ingredient {
        /// Part of the ingredient name
        query: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = littlespoon::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    littlespoon::observability::init_observability(
        "littlespoon",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    let session = littlespoon::Session::from_config(&config)?;
    let book = Guidebook::builtin();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Plan => plan(&session, cli.json, &mut out),
        Commands::Shopping => shopping(&session, cli.json, &mut out),
        Commands::Recipes(args) => recipes(&session, args, cli.json, &mut out),
        Commands::Guidance { age } => guidance(&session, &book, age, cli.json, &mut out),
        Commands::Ingredient { query } => ingredient(&session, &book, &query, cli.json, &mut out),
    }
}
