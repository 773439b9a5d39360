//! Build a `WhatsApp` order link from the command line.

use elyosr_core::order::order_link;
use elyosr_core::{Cart, OrderInfo};

use super::{CliError, Context, ItemSpec};

/// Print the deep link for an order of `items`.
///
/// Returns the link.
///
/// # Errors
///
/// Returns an error if a required field is empty or an item is not in the
/// catalog.
#[allow(clippy::print_stdout)]
pub fn run(ctx: &Context, info: &OrderInfo, items: &[ItemSpec]) -> Result<String, CliError> {
    info.validate()?;

    let catalog = ctx.catalog();
    let mut cart = Cart::new();
    for item in items {
        let product = catalog
            .get(&item.id)
            .ok_or_else(|| CliError::UnknownProduct(item.id.clone()))?;
        cart.add(product);
        cart.update_quantity(&item.id, i64::from(item.quantity) - 1);
    }

    let link = order_link(
        &ctx.config.whatsapp_phone,
        info,
        cart.items(),
        cart.total(),
    );
    tracing::info!(items = cart.len(), total = %cart.total(), "order link built");
    println!("{link}");
    Ok(link)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use elyosr_core::{OrderInfoError, ProductId};

    use super::*;
    use crate::commands::tests::context;

    fn item(id: &str, quantity: u32) -> ItemSpec {
        ItemSpec {
            id: ProductId::from(id),
            quantity,
        }
    }

    #[test]
    fn test_order_link() {
        let ctx = context();
        let info = OrderInfo::new("أحمد", "0100", "شارع 9");

        let link = run(&ctx, &info, &[item("1", 2), item("5", 1)]).unwrap();

        assert!(link.starts_with("https://wa.me/201012345678?text="));
        // 2 x 10 + 15
        assert!(link.contains("35%20"));
    }

    #[test]
    fn test_order_requires_address() {
        let ctx = context();
        let info = OrderInfo::new("أحمد", "0100", "");

        let err = run(&ctx, &info, &[item("1", 1)]).unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidOrder(OrderInfoError::MissingAddress)
        ));
    }

    #[test]
    fn test_order_unknown_item() {
        let ctx = context();
        let info = OrderInfo::new("a", "b", "c");

        let err = run(&ctx, &info, &[item("missing", 1)]).unwrap_err();
        assert!(matches!(err, CliError::UnknownProduct(_)));
    }
}
