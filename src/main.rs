use clap::Parser;
use jellyfin_renamer::cli::{Cli, Command};
use jellyfin_renamer::output::{display_dry_run, display_execution_result, display_undo_result};
use jellyfin_renamer::progress::{should_use_colors, Progress};
use jellyfin_renamer::{
    extend_episodes, logging, rename_parts, undo_from_log, AppError, EpisodeOptions,
    EpisodePattern, PartMapping, PartOptions, PartPattern, RenameResult,
};
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    logging::init(cli.verbose);

    debug!(?cli, "Arguments parsed");

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut progress = Progress::new_with_ui(cli.verbose > 0, should_use_colors());

    match cli.command {
        Command::ExtendEpisodes {
            directory_working,
            regex_pattern,
            episode_count,
            dry_run,
        } => {
            // Validate everything before touching the directory
            let pattern = EpisodePattern::new(&regex_pattern)?;
            let options = EpisodeOptions {
                start: episode_count,
                dry_run,
            };

            info!(
                "Extending episodes in {:?} with pattern {}",
                directory_working,
                pattern.as_str()
            );

            let result = extend_episodes(&directory_working, &pattern, &options, &mut progress)?;
            display_result(&result)
        }

        Command::Parts {
            directory_working,
            regex_pattern,
            mapping,
            dry_run,
        } => {
            let pattern = PartPattern::new(&regex_pattern)?;
            let mapping = PartMapping::from_json(&mapping)?;
            let options = PartOptions { dry_run };

            info!(
                "Renaming parts in {:?} with pattern {} and {} mappings",
                directory_working,
                pattern.as_str(),
                mapping.len()
            );

            let result =
                rename_parts(&directory_working, &pattern, &mapping, &options, &mut progress)?;
            display_result(&result)
        }

        Command::Undo { directory_working } => {
            info!("Undo mode: {:?}", directory_working);

            let result = undo_from_log(&directory_working, &mut progress)?;
            display_undo_result(&result, &mut std::io::stdout())
                .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))
        }
    }
}

fn display_result(result: &RenameResult) -> Result<(), AppError> {
    let mut stdout = std::io::stdout();

    let displayed = if result.dry_run {
        display_dry_run(result, &mut stdout)
    } else {
        display_execution_result(result, &mut stdout)
    };

    displayed.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))
}
