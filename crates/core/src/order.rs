//! Order message composition.
//!
//! An order is never stored: checkout formats the cart and the customer's
//! contact details into a human-readable message and hands it to `WhatsApp`
//! through a `wa.me` deep link. The message layout below is what the shop
//! owner reads on their phone, so it is kept byte-for-byte stable.
//!
//! Everything here is pure. Opening the link is the caller's job.

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::{CURRENCY_LABEL, CartItem, OrderInfo, Price};

/// Base URL of `WhatsApp` click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Separator line between the contact block, the items, and the total.
const SEPARATOR: &str = "---------------------------";

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the order message for `items` with the given grand total.
///
/// Does not validate `info`; callers check required fields first.
#[must_use]
pub fn compose(info: &OrderInfo, items: &[CartItem], total: Price) -> String {
    let mut message = String::from("🛒 *طلب جديد من ماركت اليسر - EL YOSR*\n\n");

    // Writing to a String cannot fail.
    let _ = writeln!(message, "👤 *الاسم:* {}", info.name);
    let _ = writeln!(message, "📞 *رقم الهاتف:* {}", info.phone);
    let _ = writeln!(message, "📍 *العنوان:* {}", info.address);
    if let Some(notes) = info.notes() {
        let _ = writeln!(message, "📝 *ملاحظات:* {notes}");
    }
    message.push_str(SEPARATOR);
    message.push('\n');

    let lines: Vec<String> = items.iter().map(item_line).collect();
    message.push_str(&lines.join("\n"));

    message.push('\n');
    message.push_str(SEPARATOR);
    message.push('\n');
    let _ = write!(message, "💰 *الإجمالي الكلي:* {total} {CURRENCY_LABEL}");

    message
}

/// One bullet line: `• name (quantity × price ج.م)`.
fn item_line(item: &CartItem) -> String {
    format!(
        "• {} ({} × {} {CURRENCY_LABEL})",
        item.product.name, item.quantity, item.product.price
    )
}

/// Percent-encode `text` the way browsers encode a URI component.
#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Deep link that opens a chat with `destination` prefilled with `message`.
///
/// `destination` is the international phone number without `+` or spaces.
#[must_use]
pub fn whatsapp_link(destination: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}/{destination}?text={}",
        encode_component(message)
    )
}

/// Compose the message and wrap it in the deep link in one step.
#[must_use]
pub fn order_link(destination: &str, info: &OrderInfo, items: &[CartItem], total: Price) -> String {
    whatsapp_link(destination, &compose(info, items, total))
}
