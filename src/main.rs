// jp-prefecture command-line lookup
//
//     jp-prefecture code 01
//     jp-prefecture name miya
//     jp-prefecture --json zip 100-0001

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jp_prefecture::{Config, Prefecture, Query};

#[derive(Debug, Parser)]
#[command(name = "jp-prefecture", version, about = "Look up Japanese prefectures")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Replacement prefecture table (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    mapping_data: Option<PathBuf>,

    /// Replacement zip table (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    zip_mapping_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every prefecture
    All,
    /// Find by JIS code ("13", "01")
    Code { code: String },
    /// Find by name, exact or prefix, in kanji, English, hiragana, or katakana
    Name { name: String },
    /// Find by postal code ("1000001" or "100-0001")
    Zip { zip: String },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("jp_prefecture=warn")
    ).init();

    let cli = Cli::parse();

    let config = Config {
        mapping_data: cli.mapping_data,
        zip_mapping_data: cli.zip_mapping_data,
    };
    if !config.is_embedded() {
        if let Err(e) = jp_prefecture::setup(&config) {
            log::error!("Failed to load mapping data: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    }

    let query = match cli.command {
        Command::All => {
            print_all(jp_prefecture::all(), cli.json);
            return ExitCode::SUCCESS;
        }
        Command::Code { code } => Query::code(code),
        Command::Name { name } => Query::name(name),
        Command::Zip { zip } => Query::zip(zip),
    };

    match jp_prefecture::find(&query) {
        Some(pref) => {
            print_one(pref, cli.json);
            ExitCode::SUCCESS
        }
        None => {
            log::info!("No prefecture matches {:?}", query);
            ExitCode::from(1)
        }
    }
}

fn print_one(pref: &Prefecture, json: bool) {
    if json {
        match serde_json::to_string_pretty(pref) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("Failed to serialize {}: {}", pref, e),
        }
    } else {
        println!("{}", pref);
    }
}

fn print_all(prefs: &[Prefecture], json: bool) {
    if json {
        match serde_json::to_string_pretty(prefs) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("Failed to serialize prefectures: {}", e),
        }
    } else {
        for pref in prefs {
            println!("{}", pref);
        }
    }
}
