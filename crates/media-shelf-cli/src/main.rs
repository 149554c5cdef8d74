mod commands;
mod logging;
mod progress;
mod render;

use std::env;
use std::io::{self, Write};
use std::process;

use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, ListArgs, RenameArgs};
use dotenv::dotenv;
use media_shelf_core::metadata::{describe, MetadataProvider, TmdbClient};
use media_shelf_core::{AppConfig, Library, ListQuery, SilentReporter};
use progress::CliReporter;
use tracing::{debug, error};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match media_shelf_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    let mut library = Library::from_config(&config);
    if let Some(root) = &args.library {
        library.set_root(root);
    }
    debug!("Library root: {}", library.root().display());

    match args.command {
        Some(Commands::List(list_args)) => run_list(&library, &config, list_args)?,
        Some(Commands::Info { path, json }) => match library.file_info(&path) {
            Some(info) if json => println!("{}", serde_json::to_string_pretty(&info)?),
            Some(info) => render::print_info(&info),
            None => {
                eprintln!("{} {}", "File not found:".red(), path.display());
                process::exit(1);
            }
        },
        Some(Commands::Subtitle { video }) => match library.find_related_subtitle(&video) {
            Some(subtitle) => println!("{}", subtitle.display()),
            None => println!("{}", "No matching subtitle".dimmed()),
        },
        Some(Commands::Rename(rename_args)) => {
            if !run_rename(&library, rename_args)? {
                process::exit(1);
            }
        }
        Some(Commands::Movie { title }) => {
            let client = tmdb_client(&config)?;
            println!("{}", describe(client.search_movie(&title).as_ref()));
        }
        Some(Commands::Tv { name }) => {
            let client = tmdb_client(&config)?;
            println!("{}", describe(client.search_tv_show(&name).as_ref()));
        }
        Some(Commands::Episodes {
            show,
            season,
            episode,
        }) => {
            let client = tmdb_client(&config)?;
            let lookup = client.episode_info(&show, season, episode);
            println!("{}", describe(lookup.as_ref()));
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", redacted(&config));
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_list(library: &Library, config: &AppConfig, args: ListArgs) -> anyhow::Result<()> {
    let query = ListQuery {
        page: args.page,
        per_page: args.per_page.unwrap_or(config.per_page),
        search: args.search,
        sort_field: args.sort,
        sort_order: args.order,
    };

    if args.json {
        let result = library.query_with_progress(&query, &SilentReporter);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let result = library.query_with_progress(&query, &CliReporter::new());
        render::print_page(&result);
    }
    Ok(())
}

/// Returns whether the main rename went through.
fn run_rename(library: &Library, args: RenameArgs) -> anyhow::Result<bool> {
    if !args.yes {
        let prompt = format!(
            "Rename {} to {}?",
            args.path.display(),
            args.new_name.bold()
        );
        if !prompt_confirm(&prompt, Some(false)).context("Failed to read confirmation")? {
            println!("Aborted");
            return Ok(true);
        }
    }

    let outcome = library.rename(&args.path, &args.new_name, !args.keep_subtitle);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render::print_outcome(&outcome);
    }
    Ok(outcome.success)
}

fn tmdb_client(config: &AppConfig) -> anyhow::Result<TmdbClient> {
    let api_key = config
        .tmdb_api_key
        .clone()
        .or_else(|| env::var("TMDB_API_KEY").ok())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| anyhow!("No TMDB API key: set tmdb_api_key in Config or TMDB_API_KEY"))?;
    TmdbClient::new(api_key).context("Failed to build TMDB client")
}

fn redacted(config: &AppConfig) -> AppConfig {
    let mut shown = config.clone();
    if shown.tmdb_api_key.is_some() {
        shown.tmdb_api_key = Some("********".to_string());
    }
    shown
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(default.unwrap_or(false));
        }

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
