use backend_codemods::utils::{error::CodemodError, logger};
use backend_codemods::{BulkFixArgs, BulkFixer, LocalFs};
use clap::Parser;

fn main() {
    let args = BulkFixArgs::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting bulk literal fix");

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ Bulk fix failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &BulkFixArgs) -> Result<(), CodemodError> {
    let config = args.scan_config()?;
    tracing::debug!("Scan config: {:?}", config);

    let dry_run = config.dry_run;
    let fixer = BulkFixer::new(LocalFs::new(), config)?;

    if args.json {
        let report = fixer.run()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // per-file lines go out as each file is done, so an abort still lists them
    let report = fixer.run_with(|outcome| {
        if let Some(line) = outcome.progress_line(dry_run) {
            println!("{}", line);
        }
    })?;
    println!("{}", report.summary_line());

    Ok(())
}
