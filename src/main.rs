use std::fs;
use std::path::Path;

use clap::Parser;

use indb_diet_pro::calibrate::{CalibrationConfig, print_stats, run_calibration, write_csv};
use indb_diet_pro::catalog::{CatalogConfig, FoodCatalog, export_csv, save_catalog};
use indb_diet_pro::chat::{ChatMemory, ChatRouter, NoCorrection, NoMath, OfflineSearch, SessionContext};
use indb_diet_pro::cli::{Cli, Command};
use indb_diet_pro::error::Result;
use indb_diet_pro::interface::{
    collect_plan_request, display_catalog_summary, display_plan, prompt_chat_message,
    prompt_yes_no,
};
use indb_diet_pro::planner::DietPlanner;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog_config = CatalogConfig {
        size: cli.catalog_size,
        seed: cli.seed,
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { out } => cmd_plan(&catalog_config, out.as_deref()),
        Command::Catalog { csv, json } => cmd_catalog(&catalog_config, csv.as_deref(), json.as_deref()),
        Command::Chat { memory, tech } => cmd_chat(&memory, &tech),
        Command::Calibrate {
            runs,
            calibration_seed,
            csv,
        } => cmd_calibrate(&catalog_config, runs, calibration_seed, csv.as_deref()),
    }
}

/// Generate one diet plan from an interactively collected profile.
fn cmd_plan(catalog_config: &CatalogConfig, out: Option<&Path>) -> Result<()> {
    let planner = DietPlanner::new(catalog_config);
    println!("Loaded {} foods", planner.catalog().len());
    println!();

    let request = collect_plan_request()?;
    let outcome = planner.plan(&request)?;

    display_plan(&outcome);

    // The serialized form keeps the Satisfied/BestEffort distinction
    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&outcome)?;
        fs::write(path, json)?;
        println!("Plan written to {}", path.display());
    } else {
        let save = prompt_yes_no("Save this plan to plan.json?", false)?;
        if save {
            let json = serde_json::to_string_pretty(&outcome)?;
            fs::write("plan.json", json)?;
            println!("Plan written to plan.json");
        }
    }

    Ok(())
}

/// Show catalog statistics and optionally export it.
fn cmd_catalog(
    catalog_config: &CatalogConfig,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let catalog = FoodCatalog::generate(catalog_config);
    display_catalog_summary(&catalog);

    if let Some(path) = csv {
        export_csv(path, &catalog)?;
        println!("Catalog exported to {}", path.display());
    }

    if let Some(path) = json {
        save_catalog(path, &catalog)?;
        println!("Catalog written to {}", path.display());
    }

    Ok(())
}

/// Interactive chat loop. Lookups run against the offline providers; chat
/// memory persists across sessions in a rolling JSON file.
fn cmd_chat(memory_path: &Path, tech_path: &Path) -> Result<()> {
    let mut memory = ChatMemory::load(memory_path)?;
    let router =
        ChatRouter::new(&OfflineSearch, &NoMath, &NoCorrection).with_tech_answers(tech_path)?;
    let mut ctx = SessionContext::default();

    println!("Chat session started (empty message, 'exit' or 'quit' to leave).");
    println!();

    while let Some(message) = prompt_chat_message()? {
        let reply = router.respond(&message, &mut memory, &mut ctx);
        println!("Bot: {}", reply);
    }

    memory.save(memory_path)?;
    println!("Chat memory saved to {}", memory_path.display());

    Ok(())
}

/// Re-measure solver satisfaction rates for the current catalog.
fn cmd_calibrate(
    catalog_config: &CatalogConfig,
    runs: usize,
    calibration_seed: u64,
    csv: Option<&Path>,
) -> Result<()> {
    let catalog = FoodCatalog::generate(catalog_config);
    println!("Loaded {} foods", catalog.len());

    let stats = run_calibration(
        &catalog,
        &CalibrationConfig {
            runs,
            seed: calibration_seed,
        },
    );

    print_stats(&stats);

    if let Some(path) = csv {
        write_csv(path, &stats)?;
        println!("Calibration stats written to {}", path.display());
    }

    Ok(())
}
