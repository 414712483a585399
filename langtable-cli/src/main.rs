use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use langtable::{Format, LoadOptions, Resolver};
use langtable_cli::{logging, resolve, stats, view};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Translations root directory; omit to resolve every key to itself
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Format of the translation files (json, yaml or toml)
    #[arg(short, long, global = true, default_value = "json")]
    format: Format,

    /// Fail when two files produce the same key for one language
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a dotted key for one language.
    Resolve {
        /// Language code to resolve for
        #[arg(short, long)]
        lang: String,

        /// Dotted key to resolve
        key: String,

        /// Placeholder value as name=value; later values win
        #[arg(short, long = "arg", value_parser = resolve::parse_arg)]
        args: Vec<(String, String)>,
    },

    /// List every loaded entry.
    Keys {
        /// Optional language code to filter entries by
        #[arg(short, long)]
        lang: Option<String>,

        /// Print a JSON object instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Show language and entry counts.
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let options = LoadOptions::new(args.root.unwrap_or_default(), args.format).with_strict(args.strict);
    debug!(
        root = %options.root_dir().display(),
        format = %args.format,
        strict = args.strict,
        "loading translations"
    );
    let resolver = match Resolver::new(&options) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!(error = %e, "failed to load translations");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.commands {
        Commands::Resolve { lang, key, args } => {
            resolve::print_resolved(&resolver, &lang, &key, args);
            Ok(())
        }
        Commands::Keys { lang, json } => view::print_keys(resolver.table(), &lang, json),
        Commands::Stats { json } => stats::print_stats(resolver.table(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
