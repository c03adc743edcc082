use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rodcut::batching::optimize_printing;
use rodcut::io::ext_repr::ExtRodInstance;
use rodcut::io::svg::rod_to_svg;
use rodcut_cli::config::RodCutConfig;
use rodcut_cli::io::cli::{Cli, ProblemVariant};
use rodcut_cli::io::output::{PrintBatchingInstance, PrintBatchingOutput, RodCutOutput};
use rodcut_cli::solve::solve_rod;
use rodcut_cli::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RodCutConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed RodCutConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {:?}", args.input_file))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    match args.prob_var {
        ProblemVariant::RodCutting => {
            let ext_instance = io::read_json(&args.input_file)?;
            main_rod_cutting(ext_instance, config, input_stem, &args.solution_folder)
        }
        ProblemVariant::PrintBatching => {
            let instance = io::read_json(&args.input_file)?;
            main_print_batching(instance, input_stem, &args.solution_folder)
        }
    }
}

fn main_rod_cutting(
    ext_instance: ExtRodInstance,
    config: RodCutConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let instance = rodcut::io::import(&ext_instance)?;
    info!(
        "[MAIN] Imported rod of length {} with prices {:?}",
        instance.length(),
        instance.prices()
    );
    let solutions = solve_rod(&instance, &config)?;

    if config.write_svg {
        for solution in &solutions {
            let svg_path = output_folder.join(format!("sol_{input_stem}_{}.svg", solution.solver));
            let svg = rod_to_svg(&instance, solution, config.svg_draw_options);

            io::write_svg(&svg, &svg_path)?;
        }
    }

    let output = RodCutOutput {
        instance: ext_instance,
        solutions: solutions
            .iter()
            .map(|s| rodcut::io::export(s, *EPOCH))
            .collect(),
        config,
    };
    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

    io::write_json(&output, &solution_path)
}

fn main_print_batching(
    instance: PrintBatchingInstance,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let plan = optimize_printing(&instance.jobs, &instance.constraints)?;
    info!(
        "[MAIN] Print order: {:?}, total time: {}",
        plan.print_order, plan.total_time
    );

    let output = PrintBatchingOutput { instance, plan };
    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

    io::write_json(&output, &solution_path)
}
