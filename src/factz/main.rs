use clap::Parser;
use colored::Colorize;
use factz::api::{CmdMessage, ConfigAction, FactzApi, NewFactStatus};
use factz::config::{FactzConfig, CONFIG_DIR};
use factz::error::Result;
use factz::model::SearchMode;
use factz::store::xml::XmlStore;
use std::path::PathBuf;

mod cli;
use cli::print::{print_current, print_facts, print_messages};
use cli::setup::{init_logging, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: FactzApi<XmlStore>,
    data_file: PathBuf,
    config_dir: PathBuf,
    search_mode: SearchMode,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Init) => return handle_init(&mut ctx),
        Some(Commands::Config { key, value }) => return handle_config(&ctx, key, value),
        _ => {}
    }

    load_facts(&mut ctx, &cli.merge)?;

    match cli.command {
        Some(Commands::Search { term, mode }) => handle_search(&mut ctx, term, mode),
        Some(Commands::Add {
            author,
            fact_type,
            text,
        }) => handle_add(&mut ctx, author, fact_type, text),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Next) | None => handle_next(&mut ctx),
        Some(Commands::Init) | Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = cwd.join(CONFIG_DIR);
    let config = FactzConfig::load(&config_dir)?;

    let data_file = cli.file.clone().unwrap_or(config.data_file);

    Ok(AppContext {
        api: FactzApi::new(XmlStore::new()),
        data_file,
        config_dir,
        search_mode: config.search_mode,
    })
}

/// Loads the main file and any merged ones, then starts printing the current fact.
fn load_facts(ctx: &mut AppContext, merge: &[PathBuf]) -> Result<()> {
    ctx.api.load_facts(&ctx.data_file)?;
    for path in merge {
        ctx.api.merge_facts(path)?;
    }
    ctx.api.watch(print_current);
    Ok(())
}

fn handle_next(ctx: &mut AppContext) -> Result<()> {
    ctx.api.next_random();
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    term: Vec<String>,
    mode: Option<SearchMode>,
) -> Result<()> {
    let term = term.join(" ");
    if term.trim().is_empty() {
        println!("{}", "Please enter a text to search.".yellow());
        return Ok(());
    }
    let mode = mode.unwrap_or(ctx.search_mode);
    ctx.api.search(&term, mode);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    author: Option<String>,
    fact_type: Option<String>,
    text: Option<String>,
) -> Result<()> {
    if author.is_none() && fact_type.is_none() && text.is_none() {
        print_messages(&ctx.api.add_prompt().messages);
        return Ok(());
    }

    let result = ctx.api.add_fact(
        &ctx.data_file,
        author.as_deref().unwrap_or_default(),
        fact_type.as_deref().unwrap_or_default(),
        text.as_deref().unwrap_or_default(),
    );

    match result {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) => {
            print_messages(&[CmdMessage::error(NewFactStatus::UnknownError.message())]);
            Err(e)
        }
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_facts();
    print_facts(&result.listed_facts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(&ctx.data_file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(&ctx.config_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}
