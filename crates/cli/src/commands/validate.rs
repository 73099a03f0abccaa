//! Load every dataset and report problems.

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_content::{ContentFactory, LoadResult};
use planner_core::PlannerError;

use super::DataSource;

/// Load every dataset and report problems
#[derive(Parser)]
pub struct Validate {
    /// Print only failures
    #[arg(short, long)]
    quiet: bool,
}

impl Validate {
    pub fn execute(self, source: &DataSource) -> Result<()> {
        let factory = &source.factory;
        println!(
            "{} {}",
            style("Data directory:").bold().cyan(),
            factory.data_dir().display()
        );
        println!();

        let checks: [(&str, LoadResult<usize>); 4] = [
            (ContentFactory::RACES_FILE, check_races(factory)),
            (ContentFactory::RECIPES_FILE, factory.load_recipes().map(|v| v.len())),
            (ContentFactory::BIRTHSIGNS_FILE, factory.load_birthsigns().map(|v| v.len())),
            (ContentFactory::SKILLS_FILE, factory.load_skills().map(|v| v.len())),
        ];

        let mut failures = 0;
        for (file, result) in checks {
            match result {
                Ok(count) => {
                    if !self.quiet {
                        println!("  {} {:<16} {} records", style("ok").green().bold(), file, count);
                    }
                }
                Err(e) => {
                    failures += 1;
                    println!("  {} {:<16} {:#}", style("FAIL").red().bold(), file, e);
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{} dataset(s) failed validation", failures);
        }

        if !self.quiet {
            println!();
            println!("{}", style("All datasets valid").green().bold());
        }
        Ok(())
    }
}

/// Races must parse and start with non-negative attributes.
fn check_races(factory: &ContentFactory) -> LoadResult<usize> {
    let races = factory.load_races()?;
    for race in races.iter() {
        race.starting_stats.validate().map_err(|e| {
            anyhow::anyhow!("race '{}': {} [{}]", race.id, e, e.error_code())
        })?;
    }
    Ok(races.len())
}
