use anyhow::Result;
use clap::{Parser, Subcommand};
use vibesip::Context;
use vibesip::cli::{self, OutputFormat, discover::CocktailArgs};

/// vibesip - Mood-first cocktail discovery
#[derive(Parser)]
#[command(name = "vibesip")]
#[command(about = "Find a cocktail by vibe, occasion and effort", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vibes, most relevant to an occasion first
    Vibes {
        /// Occasion id used for ranking
        #[arg(long)]
        occasion: Option<String>,
    },
    /// List occasion picker options
    Occasions,
    /// Filter cocktails by vibe, occasion, difficulty and alcohol level
    Cocktails(CocktailArgs),
    /// Show the complexity score and difficulty tier of a cocktail
    Score {
        /// Cocktail id
        cocktail_id: String,
    },
    /// Validate the catalog
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = vibesip::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    vibesip::observability::init_observability(
        "vibesip",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    let ctx = Context::from_config(&config)?;

    match cli.command {
        Commands::Vibes { occasion } => vibes_command(&ctx, occasion, cli.format),
        Commands::Occasions => occasions_command(&ctx, cli.format),
        Commands::Cocktails(args) => cocktails_command(&ctx, args, cli.format),
        Commands::Score { cocktail_id } => score_command(&ctx, cocktail_id, cli.format),
        Commands::Check => check_command(&ctx, cli.format),
    }
}

#[tracing::instrument(skip(ctx))]
fn vibes_command(ctx: &Context, occasion: Option<String>, format: OutputFormat) -> Result<()> {
    println!("{}", cli::discover::vibes(ctx, occasion.as_deref(), format)?);
    Ok(())
}

#[tracing::instrument(skip(ctx))]
fn occasions_command(ctx: &Context, format: OutputFormat) -> Result<()> {
    println!("{}", cli::discover::occasions(ctx, format)?);
    Ok(())
}

#[tracing::instrument(skip(ctx))]
fn cocktails_command(ctx: &Context, args: CocktailArgs, format: OutputFormat) -> Result<()> {
    println!("{}", cli::discover::cocktails(ctx, &args, format)?);
    Ok(())
}

#[tracing::instrument(skip(ctx))]
fn score_command(ctx: &Context, cocktail_id: String, format: OutputFormat) -> Result<()> {
    println!("{}", cli::discover::score(ctx, &cocktail_id, format)?);
    Ok(())
}

#[tracing::instrument(skip(ctx))]
fn check_command(ctx: &Context, format: OutputFormat) -> Result<()> {
    let report = cli::check::check(&ctx.catalog);
    println!("{}", report.render(format)?);

    if !report.is_ok() {
        anyhow::bail!("Catalog check found {} problem(s)", report.problems.len());
    }

    Ok(())
}
