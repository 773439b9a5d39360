//! El Yosr CLI - Catalog management and order tools.
//!
//! Works directly on the storefront's data directory, so the same catalog
//! and theme are visible to a running storefront after its next restart.
//!
//! # Usage
//!
//! ```bash
//! # Write the default catalog (refuses to overwrite without --force)
//! elyosr seed --force
//!
//! # List products in one category
//! elyosr products list --category "تسالي"
//!
//! # Add a product
//! elyosr products save --password admin --name "مياه معدنية" --price 7 --category "أخرى"
//!
//! # Build a WhatsApp order link
//! elyosr order --name "أحمد" --phone 0100 --address "شارع 9" --item 1:2 --item 5
//! ```
//!
//! # Commands
//!
//! - `seed` - Reset the catalog to the default products
//! - `products` - List, save, delete and summarize products
//! - `theme` - Show or toggle the stored theme
//! - `order` - Print the `WhatsApp` deep link for an order

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use elyosr_core::{Price, ProductId};

mod commands;

use commands::ItemSpec;

#[derive(Parser)]
#[command(name = "elyosr")]
#[command(author, version, about = "El Yosr CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset the catalog to the default products
    Seed {
        /// Overwrite an existing catalog
        #[arg(short, long)]
        force: bool,
    },
    /// Manage catalog products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Show or toggle the stored theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Print the WhatsApp order link for a set of products
    Order {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer phone number
        #[arg(long)]
        phone: String,

        /// Delivery address
        #[arg(long)]
        address: String,

        /// Optional notes for the shop
        #[arg(long, default_value = "")]
        notes: String,

        /// Product to order as `ID` or `ID:QTY` (repeatable)
        #[arg(long = "item", value_name = "ID[:QTY]")]
        items: Vec<ItemSpec>,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered
    List {
        /// Category label (omit for all categories)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Create a product, or replace one when --id is given
    Save {
        /// Admin password
        #[arg(long, env = "ELYOSR_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Id of the product to replace
        #[arg(long)]
        id: Option<ProductId>,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price in Egyptian pounds
        #[arg(short, long)]
        price: Price,

        /// Category label
        #[arg(short, long, default_value = elyosr_core::default_new_product_category())]
        category: String,

        /// Image URL (new products get a placeholder when omitted)
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a product
    Delete {
        /// Admin password
        #[arg(long, env = "ELYOSR_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Id of the product to delete
        #[arg(long)]
        id: ProductId,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },
    /// Show product count and average price
    Stats,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme
    Show,
    /// Flip between light and dark
    Toggle,
}

fn main() {
    // Logs go to stderr so command output stays pipeable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Seed { force } => commands::seed::run(&ctx, force)?,
        Commands::Products { action } => match action {
            ProductsAction::List { category, search } => {
                commands::products::list(&ctx, category.as_deref(), &search);
            }
            ProductsAction::Save {
                password,
                id,
                name,
                price,
                category,
                image,
            } => {
                let draft = elyosr_core::ProductDraft {
                    id,
                    name,
                    price,
                    image,
                    category,
                };
                commands::products::save(&ctx, &password, draft)?;
            }
            ProductsAction::Delete { password, id, yes } => {
                commands::products::delete(&ctx, &password, &id, yes)?;
            }
            ProductsAction::Stats => commands::products::stats(&ctx),
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&ctx),
            ThemeAction::Toggle => commands::theme::toggle(&ctx)?,
        },
        Commands::Order {
            name,
            phone,
            address,
            notes,
            items,
        } => {
            let info = elyosr_core::OrderInfo::new(name, phone, address).with_notes(notes);
            commands::order::run(&ctx, &info, &items)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_order_items_parse() {
        let cli = Cli::try_parse_from([
            "elyosr", "order", "--name", "a", "--phone", "1", "--address", "x", "--item", "1:2",
            "--item", "5",
        ])
        .unwrap();

        let Commands::Order { items, notes, .. } = cli.command else {
            panic!("expected order command");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].quantity, 1);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_delete_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from([
            "elyosr", "products", "delete", "--password", "admin", "--id", "3",
        ])
        .unwrap();

        let Commands::Products {
            action: ProductsAction::Delete { yes, .. },
        } = cli.command
        else {
            panic!("expected products delete");
        };
        assert!(!yes);
    }
}
