//! Catalog product commands.
//!
//! Edits go through the same editor the admin view uses, so the password
//! gate and the id rules are identical.

use elyosr_core::{CategoryFilter, Product, ProductDraft, ProductId, filter_products};
use elyosr_storefront::services::{EditOutcome, editor};

use super::{CliError, Context};

#[allow(clippy::print_stdout)]
fn print_product(product: &Product) {
    println!(
        "{}\t{}\t{}\t{}",
        product.id,
        product.name,
        product.price.display(),
        product.category
    );
}

/// Print products matching a category and a name search.
pub fn list(ctx: &Context, category: Option<&str>, search: &str) {
    let catalog = ctx.catalog();
    let filter = category.map_or(CategoryFilter::All, CategoryFilter::parse);

    for product in filter_products(catalog.products(), &filter, search) {
        print_product(product);
    }
}

/// Create or replace a product.
///
/// Returns the id of the saved product.
///
/// # Errors
///
/// Returns an error if the password is wrong, the draft is rejected, the
/// id is unknown, or the catalog cannot be written.
#[allow(clippy::print_stdout)]
pub fn save(ctx: &Context, password: &str, draft: ProductDraft) -> Result<ProductId, CliError> {
    ctx.authenticate(password)?;

    let mut catalog = ctx.catalog();
    let applied = editor::create_or_update(&mut catalog, draft)?;
    if let Some(e) = applied.persist_error {
        return Err(e.into());
    }

    match applied.outcome {
        EditOutcome::Created(id) => {
            println!("Created product {id}");
            Ok(id)
        }
        EditOutcome::Updated(id) => {
            println!("Updated product {id}");
            Ok(id)
        }
        EditOutcome::Unknown(id) => Err(CliError::UnknownProduct(id)),
    }
}

/// Delete a product after confirmation.
///
/// # Errors
///
/// Returns an error if the password is wrong, the deletion is not
/// confirmed, the id is unknown, or the catalog cannot be written.
#[allow(clippy::print_stdout)]
pub fn delete(ctx: &Context, password: &str, id: &ProductId, confirmed: bool) -> Result<(), CliError> {
    ctx.authenticate(password)?;

    let mut catalog = ctx.catalog();
    let applied = editor::delete(&mut catalog, id, confirmed)?;
    if let Some(e) = applied.persist_error {
        return Err(e.into());
    }
    if !applied.outcome {
        return Err(CliError::UnknownProduct(id.clone()));
    }

    println!("Deleted product {id}");
    Ok(())
}

/// Print product count and average price.
#[allow(clippy::print_stdout)]
pub fn stats(ctx: &Context) {
    let catalog = ctx.catalog();
    let stats = editor::stats(catalog.products());
    println!("Products: {}", stats.product_count);
    println!("Average price: {}", stats.average_price);
}
