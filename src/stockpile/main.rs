use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stockpile::api::{CmdResult, ConfigAction, InventoryApi};
use stockpile::commands;
use stockpile::config::{StockConfig, KEYS};
use stockpile::error::Result;
use stockpile::model::{ProductDraft, ProductId};
use stockpile::store::fs::FileStore;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::menu::{self, MenuOptions};
use cli::print::{print_messages, print_product, print_rows};

const CONFIG_DIR_ENV: &str = "STOCKPILE_CONFIG_DIR";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

struct AppContext {
    api: InventoryApi<FileStore>,
    config: StockConfig,
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    stockpile::logging::init(cli.verbose);

    if !Term::stdout().is_term() {
        colored::control::set_override(false);
    }

    let config_dir = config_dir();
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_dir)?;
    let load = ctx.api.load()?;
    print_messages(&mut io::stderr(), &load.messages)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Add {
            name,
            desc,
            price,
            quantity,
        }) => handle_add(&mut ctx, ProductDraft::new(name, desc, price, quantity)),
        Some(Commands::Edit {
            id,
            name,
            desc,
            price,
            quantity,
        }) => handle_edit(&mut ctx, id, name, desc, price, quantity),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Config { .. }) => Ok(ExitCode::SUCCESS),
    }
}

fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    match ProjectDirs::from("com", "stockpile", "stockpile") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => PathBuf::from(".stockpile"),
    }
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let config = StockConfig::load(config_dir)?;
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    tracing::debug!(data_file = %data_file.display(), "using catalog file");

    Ok(AppContext {
        api: InventoryApi::new(FileStore::new(data_file)),
        config,
    })
}

fn handle_menu(ctx: &mut AppContext) -> Result<ExitCode> {
    let interactive = Term::stdout().is_term();
    let stdin = io::stdin();
    menu::run(
        &mut ctx.api,
        stdin.lock(),
        io::stdout(),
        MenuOptions {
            currency: &ctx.config.currency,
            interactive,
        },
    )?;
    Ok(ExitCode::SUCCESS)
}

fn handle_list(ctx: &AppContext) -> Result<ExitCode> {
    print_rows(&mut io::stdout(), ctx.api.rows(), &ctx.config.currency)?;
    Ok(ExitCode::SUCCESS)
}

fn handle_view(ctx: &AppContext, id: ProductId) -> Result<ExitCode> {
    let result = ctx.api.view(id);
    let mut out = io::stdout();
    for product in &result.affected_products {
        print_product(&mut out, product, &ctx.config.currency)?;
    }
    finish(&result)
}

fn handle_add(ctx: &mut AppContext, draft: ProductDraft) -> Result<ExitCode> {
    let result = ctx.api.add(draft);
    save_and_finish(ctx, result)
}

fn handle_edit(
    ctx: &mut AppContext,
    id: ProductId,
    name: Option<String>,
    desc: Option<String>,
    price: Option<f64>,
    quantity: Option<u32>,
) -> Result<ExitCode> {
    let Some(current) = commands::find::run(ctx.api.catalog(), id) else {
        return finish(&ctx.api.view(id));
    };
    let draft = ProductDraft::new(
        name.unwrap_or_else(|| current.name.clone()),
        desc.unwrap_or_else(|| current.description.clone()),
        price.unwrap_or(current.price),
        quantity.unwrap_or(current.quantity),
    );
    let result = ctx.api.edit(id, draft);
    save_and_finish(ctx, result)
}

fn handle_remove(ctx: &mut AppContext, id: ProductId) -> Result<ExitCode> {
    let result = ctx.api.remove(id);
    save_and_finish(ctx, result)
}

fn handle_config(
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(config_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            let mut out = io::stdout();
            for key in KEYS {
                writeln!(out, "{} = {}", key, config.get(key).unwrap_or_default())?;
            }
        }
    }
    finish(&result)
}

fn save_and_finish(ctx: &mut AppContext, mut result: CmdResult) -> Result<ExitCode> {
    if ctx.api.is_dirty() {
        let saved = ctx.api.save()?;
        result.messages.extend(saved.messages);
    }
    finish(&result)
}

/// Prints the messages and maps error-level messages (e.g. not found) to a failing exit code.
fn finish(result: &CmdResult) -> Result<ExitCode> {
    print_messages(&mut io::stdout(), &result.messages)?;
    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
