use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use recipe_draft::{load_config, DraftConfig, DraftError, DraftImporter, ImportResult};

#[derive(Parser)]
#[command(name = "recipe-draft")]
#[command(about = "Turn a pasted recipe caption into a structured recipe", long_about = None)]
#[command(version)]
struct Cli {
    /// Print the extracted draft instead of the submitted recipe
    #[arg(long)]
    draft: bool,

    /// Configuration file (defaults to config.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Text file to read; stdin when absent or "-"
    file: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<String, DraftError> {
    let config = match cli.config.as_deref() {
        Some(path) => load_config(Some(path))?,
        None => DraftConfig::load()?,
    };

    let mut builder = DraftImporter::builder().config(config);
    builder = match cli.file {
        Some(path) if path.as_os_str() != "-" => builder.file(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            builder.text(text)
        }
    };
    if cli.draft {
        builder = builder.draft_only();
    }

    let json = match builder.build()? {
        ImportResult::Draft(draft) => serde_json::to_string_pretty(&draft)?,
        ImportResult::Recipe(recipe) => serde_json::to_string_pretty(&recipe)?,
    };
    Ok(json)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
