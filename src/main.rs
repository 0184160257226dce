use anyhow::Context;
use evogait::{ConfigManager, ConsoleProgressCallback, EvolutionEngine, FileBridge, LocalEvaluator};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(|s| s.as_str());
    let report_path = args.get(2).map(|s| s.as_str());

    let manager = ConfigManager::new();
    if let Some(path) = config_path {
        manager
            .load_from_file(path)
            .with_context(|| format!("loading config from {}", path))?;
    }
    let config = manager.get();

    println!("Now running GA");
    println!("  Population size: {}", config.evolution.population_size);
    println!("  Generations: {}", config.evolution.num_generations);
    println!("  Rule length: {}", config.evolution.rule_length);
    println!("  Elites: {}", config.evolution.elitism_count);

    let mut engine = EvolutionEngine::new(config.evolution.clone());
    let mut callback = ConsoleProgressCallback;

    let summaries = if config.bridge.evaluator_command.is_some() {
        let mut bridge = FileBridge::new(&config.bridge);
        engine.run(&mut bridge, &mut callback)?
    } else {
        println!("No evaluator command configured; scoring with the offline evaluator");
        let mut local = LocalEvaluator;
        engine.run(&mut local, &mut callback)?
    };

    // Final artifact: the ordered (generation, best fitness) pairs.
    let report: Vec<(usize, f64)> = summaries
        .iter()
        .map(|s| (s.generation, s.best_fitness))
        .collect();

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).with_context(|| format!("writing report to {}", path))?;
        println!("Report written to {}", path);
    } else {
        println!("Best fitness by generation: {:?}", report);
    }

    Ok(())
}
