use super::logging;
use super::print::{
    eprint_messages, print_cart, print_config, print_listing, print_messages, print_options,
    print_query,
};
use super::setup::{CartCommands, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use shopfront::api::{CmdResult, ConfigAction, ShopApi, ShopPaths};
use shopfront::error::{Result, ShopError};
use shopfront::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the data directory when `--data-dir` is not given.
pub const HOME_ENV: &str = "SHOPFRONT_HOME";

struct AppContext {
    api: ShopApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse { query }) => handle_browse(&ctx, &query),
        Some(Commands::Toggle { key, value, query }) => {
            handle_refine(ctx.api.toggle_filter(&query, &key, &value))
        }
        Some(Commands::Add { key, value, query }) => {
            handle_refine(ctx.api.add_filter(&query, &key, &value))
        }
        Some(Commands::Remove { key, value, query }) => {
            handle_refine(ctx.api.remove_filter(&query, &key, value.as_deref()))
        }
        Some(Commands::Clear { query }) => handle_refine(ctx.api.clear_filters(&query)),
        Some(Commands::Sort { sort, query }) => handle_refine(ctx.api.sort(&query, &sort)),
        Some(Commands::Price { min, max, query }) => {
            handle_refine(ctx.api.price_range(&query, &min, &max))
        }
        Some(Commands::Options) => {
            print_options();
            Ok(())
        }
        Some(Commands::Cart { action }) => handle_cart(&mut ctx, action),
        Some(Commands::Import { paths }) => handle_import(&mut ctx, paths),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_browse(&ctx, ""),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let store = FileStore::new(data_dir.clone());
    let api = ShopApi::new(store, ShopPaths { data_dir });
    Ok(AppContext { api })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shopfront", "shopfront")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopError::Store("Could not determine data directory".to_string()))
}

fn handle_browse(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.browse(query)?;
    if let Some(listing) = &result.listing {
        print_listing(&result.listed_products, listing);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_refine(result: Result<CmdResult>) -> Result<()> {
    let result = result?;
    if let Some(query) = result.query() {
        print_query(query);
    }
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_cart(ctx: &mut AppContext, action: Option<CartCommands>) -> Result<()> {
    let result = match action.unwrap_or(CartCommands::Show) {
        CartCommands::Show => ctx.api.cart()?,
        CartCommands::Add { product } => ctx.api.add_to_cart(&product)?,
        CartCommands::Remove { product } => ctx.api.remove_from_cart(&product)?,
        CartCommands::Clear => ctx.api.clear_cart()?,
    };
    print_messages(&result.messages);
    if let Some(cart) = &result.cart {
        print_cart(cart);
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<()> {
    let result = ctx.api.import_products(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_flag_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/srv/shop"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/shop"));
    }
}
