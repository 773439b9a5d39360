//! Show or toggle the stored theme.

use elyosr_storefront::services::theme::{load_theme, toggle_theme};

use super::{CliError, Context};

#[allow(clippy::print_stdout)]
pub fn show(ctx: &Context) {
    println!("{}", load_theme(ctx.storage.as_ref()));
}

/// Flip the stored theme.
///
/// # Errors
///
/// Returns an error if the new theme cannot be written.
#[allow(clippy::print_stdout)]
pub fn toggle(ctx: &Context) -> Result<(), CliError> {
    let current = load_theme(ctx.storage.as_ref());
    let theme = toggle_theme(ctx.storage.as_ref(), current)?;
    println!("{theme}");
    Ok(())
}
