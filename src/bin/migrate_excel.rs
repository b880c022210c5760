use backend_codemods::utils::{error::CodemodError, logger};
use backend_codemods::{ExcelMigrator, LocalFs, MigrateExcelArgs};
use clap::Parser;

fn main() {
    let args = MigrateExcelArgs::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ Migration failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &MigrateExcelArgs) -> Result<(), CodemodError> {
    let config = args.migrate_config()?;
    let file_name = config
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.file.display().to_string());

    let migrator = ExcelMigrator::new(LocalFs::new(), config)?;
    let outcome = migrator.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.written {
        println!("Migration completed successfully!");
        println!("Converted all xlsx patterns to exceljs in {}", file_name);
    } else {
        let status = if outcome.changed { "would change" } else { "unchanged" };
        println!("Dry run: {} {}", outcome.path.display(), status);
    }

    Ok(())
}
