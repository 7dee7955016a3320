use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{ActivityLevel, Allergen, Gender, Goal, MacroBounds, Preference};
use crate::planner::calculations::daily_calories;
use crate::planner::{filter_candidates, solve};

/// Calibration run parameters.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationConfig {
    /// Solver runs per goal.
    pub runs: usize,
    /// Seed for both profile generation and solver sampling.
    pub seed: u64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            runs: 200,
            seed: 123,
        }
    }
}

/// Aggregate solver behavior for one goal.
#[derive(Debug, Clone, Serialize)]
pub struct GoalStats {
    pub goal: &'static str,
    pub runs: usize,
    pub satisfied: usize,
    pub satisfaction_rate: f64,
    pub avg_attempts: f64,
}

/// Measure how often the retry loop satisfies the macro bounds within its
/// budget, per goal, over seeded random profiles.
///
/// The 60-attempt ceiling is empirical; this harness is how it gets
/// re-checked when catalog ranges or bounds change.
pub fn run_calibration(catalog: &FoodCatalog, config: &CalibrationConfig) -> Vec<GoalStats> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let candidates = filter_candidates(catalog.items(), Preference::Everything, Allergen::None);

    Goal::ALL
        .iter()
        .map(|&goal| {
            let mut satisfied = 0usize;
            let mut attempts_total = 0u64;

            for _ in 0..config.runs {
                let age = rng.gen_range(18.0..70.0);
                let gender = if rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                };
                let weight_kg = rng.gen_range(45.0..110.0);
                let height_cm = rng.gen_range(150.0..195.0);
                let activity = ActivityLevel::ALL[rng.gen_range(0..ActivityLevel::ALL.len())];

                let calories = daily_calories(age, gender, weight_kg, height_cm, activity, goal);
                let bounds = MacroBounds::for_goal(goal, weight_kg);

                let run = solve(&candidates, calories, &bounds, &mut rng);
                if run.satisfied {
                    satisfied += 1;
                }
                attempts_total += u64::from(run.attempts);
            }

            GoalStats {
                goal: goal.label(),
                runs: config.runs,
                satisfied,
                satisfaction_rate: satisfied as f64 / config.runs.max(1) as f64,
                avg_attempts: attempts_total as f64 / config.runs.max(1) as f64,
            }
        })
        .collect()
}

/// Write per-goal stats as CSV.
pub fn write_csv<P: AsRef<Path>>(path: P, stats: &[GoalStats]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in stats {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Print per-goal stats as an aligned table.
pub fn print_stats(stats: &[GoalStats]) {
    println!();
    println!("=== Solver Calibration ===");
    println!();
    println!(
        "{:<12} {:>6} {:>10} {:>8} {:>13}",
        "goal", "runs", "satisfied", "rate", "avg attempts"
    );
    for row in stats {
        println!(
            "{:<12} {:>6} {:>10} {:>7.1}% {:>13.1}",
            row.goal,
            row.runs,
            row.satisfied,
            row.satisfaction_rate * 100.0,
            row.avg_attempts
        );
    }
    println!();
}
