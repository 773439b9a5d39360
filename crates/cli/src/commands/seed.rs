//! Reset the catalog to the default products.

use elyosr_storefront::services::CatalogSource;

use super::{CliError, Context};

/// Write the default catalog.
///
/// An empty data directory is seeded on load. An existing catalog,
/// including one that could not be parsed, is only overwritten with
/// `force`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be written.
#[allow(clippy::print_stdout)]
pub fn run(ctx: &Context, force: bool) -> Result<(), CliError> {
    let mut catalog = ctx.catalog();

    match catalog.source() {
        CatalogSource::Stored | CatalogSource::Fallback if !force => {
            println!(
                "Catalog already exists ({} products). Use --force to overwrite.",
                catalog.len()
            );
            return Ok(());
        }
        // Seeding during load only logs a failed write; write again so it is reported.
        CatalogSource::Seeded | CatalogSource::Stored | CatalogSource::Fallback => {
            catalog.reset_to_defaults()?;
        }
    }

    tracing::info!(products = catalog.len(), "catalog seeded");
    println!("Seeded {} products.", catalog.len());
    Ok(())
}
