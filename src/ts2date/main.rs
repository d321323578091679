use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use ts2date::api::{
    CmdMessage, ConfigAction, MessageLevel, ProcessorDescription, Ts2DateApi, Ts2DatePaths,
};
use ts2date::config::ATTRIBUTES_LIST_KEY;
use ts2date::error::Result;
use ts2date::store::fs::JsonLinesStore;

mod args;
use args::{Cli, Commands};

type Api = Ts2DateApi<JsonLinesStore<Box<dyn std::io::BufRead>, Box<dyn std::io::Write>>>;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but reported an error.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    match cli.command {
        Commands::Convert { attributes, .. } => handle_convert(&mut api, attributes),
        Commands::Validate { attributes } => handle_validate(&api, attributes),
        Commands::Describe => handle_describe(&api),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("ts2date={}", level))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_api(cli: &Cli) -> Result<Api> {
    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);

    // Only convert touches the queues; other commands get idle stdio ones.
    let (input, output) = match &cli.command {
        Commands::Convert { input, output, .. } => (input.clone(), output.clone()),
        _ => (None, None),
    };
    let store = JsonLinesStore::open(input.as_deref(), output.as_deref())?;

    Ok(Ts2DateApi::new(store, Ts2DatePaths { config_dir }))
}

fn default_config_dir() -> PathBuf {
    ProjectDirs::from("com", "ts2date", "ts2date")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn handle_convert(api: &mut Api, attributes: Option<String>) -> Result<bool> {
    let result = api.convert(attributes)?;
    // stdout may be carrying records, so messages go to stderr here.
    print_messages(&result.messages, true);
    Ok(true)
}

fn handle_validate(api: &Api, attributes: Option<String>) -> Result<bool> {
    let result = api.validate(attributes)?;
    print_messages(&result.messages, false);
    Ok(!result.has_errors())
}

fn handle_describe(api: &Api) -> Result<bool> {
    if let Some(description) = &api.describe().description {
        print_description(description);
    }
    Ok(true)
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            println!("{} = {}", ATTRIBUTES_LIST_KEY, config.attributes_list);
        }
    }
    print_messages(&result.messages, false);
    Ok(!result.has_errors())
}

fn print_messages(messages: &[CmdMessage], to_stderr: bool) {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

fn print_description(description: &ProcessorDescription) {
    println!("{}", description.capability);
    println!();
    println!("{} {}", "Tags:".bold(), description.tags.join(", "));
    println!();
    println!("{}", "Properties:".bold());
    for prop in description.properties {
        let required = if prop.required { " (required)" } else { "" };
        println!("  {}{}", prop.name.yellow(), required);
        println!("      {}", prop.description);
    }
    println!();
    println!("{}", "Relationships:".bold());
    for rel in &description.relationships {
        println!("  {}", rel.name.yellow());
        println!("      {}", rel.description);
    }
}
