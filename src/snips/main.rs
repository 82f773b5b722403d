use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use snips::api::{CmdMessage, MessageLevel, SnipsApi, SnippetQuery};
use snips::commands::SnipsPaths;
use snips::config::SnipsConfig;
use snips::error::{Result, SnipsError};
use snips::model::Snippet;
use snips::store::fs::FileStore;
use std::fs;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands, QueryArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SnipsApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Get { query, desc }) => {
            let mut ctx = init_context(query.exclude.clone())?;
            handle_get(&mut ctx, &query, desc)
        }
        Some(Commands::Last { nr }) => {
            let mut ctx = init_context(None)?;
            handle_last(&mut ctx, nr)
        }
        Some(Commands::Export { out, query }) => {
            let mut ctx = init_context(query.exclude.clone())?;
            handle_export(&mut ctx, &query, &out)
        }
        None => {
            let mut ctx = init_context(None)?;
            handle_get(&mut ctx, &QueryArgs::default(), false)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("snips=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(extra_exclude: Option<String>) -> Result<AppContext> {
    let state_dir = match std::env::var_os("SNIPS_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "snips", "snips")
            .ok_or_else(|| SnipsError::Store("could not determine a home directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    if !state_dir.exists() {
        fs::create_dir_all(&state_dir).map_err(SnipsError::Io)?;
    }

    let config = SnipsConfig::load(&state_dir)?;

    let root = match std::env::var_os("SNIPS_PATH") {
        Some(dir) => PathBuf::from(dir),
        None => config.snippets_dir.clone().ok_or_else(|| {
            SnipsError::Api(
                "no snippets directory configured: set SNIPS_PATH or snippets_dir in config.json"
                    .to_string(),
            )
        })?,
    };

    let mut exclude = config.exclude.clone();
    if let Some(name) = extra_exclude {
        exclude.push(name);
    }

    let store = FileStore::new(root.clone())
        .with_file_ext(config.get_file_ext())
        .with_excluded(exclude);
    let paths = SnipsPaths {
        root,
        state: state_dir,
    };

    Ok(AppContext {
        api: SnipsApi::new(store, paths),
    })
}

fn to_query(args: &QueryArgs) -> SnippetQuery {
    SnippetQuery {
        id: args.id.clone(),
        language: args.lang.clone(),
        tags: args.tags.clone(),
    }
}

fn handle_get(ctx: &mut AppContext, query: &QueryArgs, desc: bool) -> Result<()> {
    let result = ctx.api.get_snippets(&to_query(query))?;
    print_snippets(&result.snippets, desc);
    print_messages(&result.messages);
    Ok(())
}

fn handle_last(ctx: &mut AppContext, nr: usize) -> Result<()> {
    let result = ctx.api.last_snippet(nr)?;
    for snip in &result.snippets {
        print_body(snip);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, query: &QueryArgs, out: &Path) -> Result<()> {
    let result = ctx.api.export_snippet(&to_query(query), out)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_snippets(snippets: &[Snippet], print_desc: bool) {
    if snippets.is_empty() {
        println!("No snippets found.");
        return;
    }

    let multiple = snippets.len() > 1;
    for snip in snippets {
        let mut ruler_needed = false;
        if multiple {
            println!("{}", format!("[{}]", snip.id().unwrap_or_default()).yellow());
            ruler_needed = true;
        }
        if print_desc {
            println!("description: {}", snip.description().unwrap_or_default());
            ruler_needed = true;
        }
        if ruler_needed {
            println!("------");
        }
        print_body(snip);
    }
}

fn print_body(snip: &Snippet) {
    print!("{}", snip.source);
    if !snip.source.is_empty() && !snip.source.ends_with('\n') {
        println!();
    }
}
