use clap::Args;
use std::path::PathBuf;
use studworks::config::AppConfig;
use studworks::error::AppError;
use studworks::import::{sql_script, ListingImporter};

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Cloud-folder listing export (CSV with Name and Public URL columns)
    #[arg(long)]
    pub(crate) listing: PathBuf,
    /// Target schema for the generated statements (defaults to APP_SQL_SCHEMA)
    #[arg(long)]
    pub(crate) schema: Option<String>,
    /// Write the SQL script to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let ImportArgs {
        listing,
        schema,
        output,
    } = args;

    let schema = match schema {
        Some(schema) => schema,
        None => AppConfig::load()?.import.sql_schema,
    };

    let works = ListingImporter::from_path(&listing)?;
    let script = sql_script(&schema, &works);

    match output {
        Some(path) => {
            std::fs::write(&path, &script)?;
            println!(
                "Classified {} folder(s) from {} into {}",
                works.len(),
                listing.display(),
                path.display()
            );
        }
        None => {
            // The script goes to stdout, so the summary goes to stderr.
            print!("{script}");
            eprintln!("Classified {} folder(s) from {}", works.len(), listing.display());
        }
    }

    Ok(())
}
