use anyhow::Result;
use clap::Parser;
use lineage_map::cli::{Cli, Commands, ExportFormatArg, ResetTarget};
use lineage_map::commands::{self, CommandContext, HistoricalInput, WokeInput};
use lineage_map::config;
use lineage_map::export::ExportFormat;
use lineage_map::store::ResetScope;
use std::io::Write;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let ctx = CommandContext::resolve(config::load_config(), cli.store, cli.plain);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Classify {
            indigenous,
            forced,
            arrived,
            participation,
            post_entrenchment,
            origin_after,
            format,
        } => {
            let input = HistoricalInput {
                indigenous,
                forced,
                arrived,
                participation,
                post_entrenchment,
                origin_after,
            };
            commands::classify_command(&ctx, &input, format, &mut out)
        }
        Commands::Score {
            wealth,
            role,
            constrained,
            compelled,
            no_benefit,
            motive,
            infra,
            format,
        } => {
            let input = WokeInput {
                wealth,
                role,
                constrained,
                compelled,
                no_benefit,
                motive,
                infra,
            };
            commands::score_command(&ctx, &input, format, &mut out)
        }
        Commands::Answer { id, value } => commands::answer_command(&ctx, &id, &value, &mut out),
        Commands::Show { format } => commands::show_command(&ctx, format, &mut out),
        Commands::Reset { scope } => {
            commands::reset_command(&ctx, convert_reset_target(scope), &mut out)
        }
        Commands::Questions => commands::print_questions(&mut out),
        Commands::Export {
            table,
            format,
            output,
        } => commands::export_table(
            &ctx,
            table,
            convert_export_format(format),
            output.as_deref(),
            &mut out,
        ),
        Commands::Stats => commands::print_stats(&mut out),
        Commands::Share { copy } => commands::share_command(&ctx, copy, &mut out),
        Commands::Init { force } => {
            commands::init_config(&std::env::current_dir()?, force)?;
            writeln!(out, "Created {} configuration file", config::CONFIG_FILE_NAME)?;
            Ok(())
        }
    }
}

// Side effect function for logger setup (I/O at edges)
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// Pure functions for data transformation
fn convert_reset_target(target: ResetTarget) -> ResetScope {
    match target {
        ResetTarget::Historical => ResetScope::Historical,
        ResetTarget::Woke => ResetScope::Woke,
        ResetTarget::All => ResetScope::All,
    }
}

fn convert_export_format(format: ExportFormatArg) -> ExportFormat {
    match format {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Json => ExportFormat::Json,
    }
}
