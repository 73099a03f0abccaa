//! Resolve a build and print its stats.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_core::{
    AttributeAssignments, BaseAttributes, Build, DerivedStat, PlannerError, StatCategory, StatSheet,
    try_resolve_with_default,
};

use super::DataSource;

/// Presentation order of derived-stat groups.
const CATEGORY_ORDER: [StatCategory; 4] = [
    StatCategory::Combat,
    StatCategory::Magic,
    StatCategory::Survival,
    StatCategory::Movement,
];

/// Resolve a build into base attributes and derived stats
#[derive(Parser)]
pub struct Stats {
    /// Race id (e.g. nord, altmer)
    #[arg(short, long, value_name = "RACE")]
    race: Option<String>,

    /// Points assigned to health
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    health: i32,

    /// Points assigned to magicka
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    magicka: i32,

    /// Points assigned to stamina
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    stamina: i32,

    /// Character level
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Saved build (JSON) to use instead of the flags above
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["race", "health", "magicka", "stamina", "level"])]
    build: Option<PathBuf>,

    /// Fail on unknown races and negative attributes instead of defaulting
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Attribute and stat tables
    Summary,
    /// JSON document with `base` and `derived`
    Json,
}

impl Stats {
    pub fn execute(self, source: &DataSource) -> Result<()> {
        let build = match &self.build {
            Some(path) => source.factory.load_build(path)?,
            None => self.build_from_flags(),
        };
        let races = source.factory.load_races()?;

        if self.strict {
            try_resolve_with_default(&build, &races, source.config.default_starting_stat)
                .map_err(|e| anyhow::anyhow!("{} [{}]", e, e.error_code()))?;
        }

        let mut sheet = StatSheet::with_config(races, &source.config);
        let base = sheet.base_attributes(&build);
        let derived = sheet.derived_stats(&build);

        match self.format {
            OutputFormat::Summary => print_summary(&build, &sheet, &base, &derived),
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "build": build,
                    "base": base,
                    "derived": &*derived,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }

    fn build_from_flags(&self) -> Build {
        let build = Build::new()
            .with_assignments(AttributeAssignments::new(self.health, self.stamina, self.magicka))
            .with_level(self.level);
        match &self.race {
            Some(race) => build.with_race(race.as_str()),
            None => build,
        }
    }
}

fn print_summary(build: &Build, sheet: &StatSheet, base: &BaseAttributes, derived: &[DerivedStat]) {
    let race = build
        .race
        .as_deref()
        .and_then(|id| sheet.races().get(id))
        .map_or("(default)", |race| race.name.as_str());

    println!("{} {}", style("Race:").bold().cyan(), race);
    println!("{} {}", style("Level:").bold().cyan(), build.level);
    if let Some(birthsign) = &build.birthsign {
        println!("{} {}", style("Birthsign:").bold().cyan(), birthsign);
    }
    println!();

    println!("{}", style("Base Attributes:").bold().yellow());
    println!("  Health:  {}", base.health);
    println!("  Magicka: {}", base.magicka);
    println!("  Stamina: {}", base.stamina);
    println!();

    for category in CATEGORY_ORDER {
        let stats: Vec<&DerivedStat> = derived.iter().filter(|stat| stat.category == category).collect();
        if stats.is_empty() {
            continue;
        }

        println!("{}", style(format!("{category:?}:")).bold().yellow());
        for stat in stats {
            let value = if stat.is_percentage {
                format!("{}%", stat.value)
            } else {
                stat.value.to_string()
            };
            println!(
                "  {:<16} {}  {}",
                stat.name,
                style(format!("{value:>5}")).green(),
                style(&stat.formula).dim()
            );
        }
        println!();
    }
}
