use clap::Args;
use serde::Serialize;
use vibesip_catalog::occasion_options;
use vibesip_discovery::{
    ComplexityScore, DiscoveryQuery, FilterCriteria, occasion_vibe_counts, rank_vibes_by_occasion,
    vibes_path,
};

use super::{OutputFormat, to_json};
use crate::Context;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Default, Args)]
pub struct CocktailArgs {
    /// Vibe id, repeat to match any of several
    #[arg(long = "vibe")]
    pub vibes: Vec<String>,

    /// Occasion id, repeat to match any of several
    #[arg(long = "occasion")]
    pub occasions: Vec<String>,

    /// Difficulty tier id
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Alcohol level id
    #[arg(long)]
    pub alcohol: Option<String>,

    /// URL query string (`vibe=...&difficulty=...`); flags are layered on top
    #[arg(long)]
    pub query: Option<String>,
}

impl CocktailArgs {
    /// Criteria from the query string, if any, then the explicit flags
    ///
    /// Only the query string picks up the configured default difficulty, the
    /// same way a bare `/cocktails?vibe=...` link does.
    pub fn criteria(&self, default_difficulty: &str) -> Result<FilterCriteria> {
        let mut criteria = match &self.query {
            Some(query) => DiscoveryQuery::parse(query)
                .map_err(|e| AppError::QueryError(e.to_string()))?
                .into_criteria(default_difficulty),
            None => FilterCriteria::new(),
        };

        for vibe in &self.vibes {
            criteria = criteria.with_vibe(vibe.as_str());
        }
        for occasion in &self.occasions {
            criteria = criteria.with_occasion(occasion.as_str());
        }
        if let Some(difficulty) = &self.difficulty {
            criteria = criteria.with_difficulty(difficulty.as_str());
        }
        if let Some(alcohol) = &self.alcohol {
            criteria = criteria.with_alcohol_level(alcohol.as_str());
        }

        Ok(criteria)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedVibe<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    occasion_count: usize,
}

#[derive(Debug, Serialize)]
struct VibeListing<'a> {
    path: String,
    vibes: Vec<RankedVibe<'a>>,
}

/// Vibes ordered by relevance to `occasion`, catalog order without one
pub fn vibes(ctx: &Context, occasion: Option<&str>, format: OutputFormat) -> Result<String> {
    let occasion = occasion.unwrap_or_default();
    let counts = occasion_vibe_counts(&ctx.catalog.cocktails, occasion);

    let listing = VibeListing {
        path: vibes_path(occasion),
        vibes: rank_vibes_by_occasion(&ctx.catalog.vibes, &ctx.catalog.cocktails, occasion)
            .into_iter()
            .map(|vibe| RankedVibe {
                id: &vibe.id,
                name: &vibe.name,
                description: &vibe.description,
                occasion_count: counts.get(vibe.id.as_str()).copied().unwrap_or(0),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => to_json(&listing),
        OutputFormat::Text => {
            let mut lines = vec![format!("# {}", listing.path)];
            lines.extend(listing.vibes.iter().map(|vibe| {
                if occasion.is_empty() {
                    format!("{}\t{}", vibe.id, vibe.name)
                } else {
                    format!("{}\t{}\t{}", vibe.id, vibe.name, vibe.occasion_count)
                }
            }));
            Ok(lines.join("\n"))
        }
    }
}

pub fn occasions(ctx: &Context, format: OutputFormat) -> Result<String> {
    let options = occasion_options(&ctx.catalog);

    match format {
        OutputFormat::Json => to_json(&options),
        OutputFormat::Text => Ok(options
            .iter()
            .map(|option| format!("{}\t{}\t{}", option.id, option.label, option.description))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CocktailRow<'a> {
    id: &'a str,
    name: &'a str,
    complexity: u32,
    difficulty_id: Option<&'a str>,
    alcohol_level_id: &'a str,
}

/// Catalog cocktails that satisfy every selected dimension
pub fn cocktails(ctx: &Context, args: &CocktailArgs, format: OutputFormat) -> Result<String> {
    let criteria = args.criteria(&ctx.default_difficulty)?;
    let filter = ctx.filter();

    let rows: Vec<CocktailRow<'_>> = filter
        .filter(&ctx.catalog.cocktails, &criteria)
        .into_iter()
        .map(|cocktail| {
            let complexity = ComplexityScore::breakdown(cocktail, ctx.weights).total();
            CocktailRow {
                id: &cocktail.id,
                name: &cocktail.name,
                complexity,
                difficulty_id: ctx.table.classify(complexity).map(|tier| tier.id.as_str()),
                alcohol_level_id: &cocktail.alcohol_level_id,
            }
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Text if rows.is_empty() => Ok("No cocktails match.".to_string()),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| {
                format!(
                    "{}\t{}\t{}\t{}",
                    row.id,
                    row.name,
                    row.complexity,
                    row.difficulty_id.unwrap_or("-")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport<'a> {
    cocktail_id: &'a str,
    ingredient_score: u32,
    step_score: u32,
    total: u32,
    difficulty_id: Option<&'a str>,
    difficulty_label: Option<&'a str>,
}

/// Complexity breakdown for one cocktail and the tier it lands in
pub fn score(ctx: &Context, cocktail_id: &str, format: OutputFormat) -> Result<String> {
    let cocktail = ctx
        .catalog
        .cocktail(cocktail_id)
        .ok_or_else(|| AppError::CocktailNotFound(cocktail_id.to_string()))?;

    let breakdown = ComplexityScore::breakdown(cocktail, ctx.weights);
    let tier = ctx.table.classify(breakdown.total());

    let report = ScoreReport {
        cocktail_id: &cocktail.id,
        ingredient_score: breakdown.ingredient_score,
        step_score: breakdown.step_score,
        total: breakdown.total(),
        difficulty_id: tier.map(|tier| tier.id.as_str()),
        difficulty_label: tier.map(|tier| tier.label.as_str()),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => Ok(format!(
            "{}: {} (ingredients {} + steps {}) -> {}",
            report.cocktail_id,
            report.total,
            report.ingredient_score,
            report.step_score,
            report.difficulty_label.unwrap_or("unclassified")
        )),
    }
}
