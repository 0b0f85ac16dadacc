//! Terminal output.

use naked_pineapple_cart::{CartError, CartView, Notification, NotificationKind};

/// Print a single line to stdout.
#[allow(clippy::print_stdout)]
pub fn line(text: &str) {
    println!("{text}");
}

/// Print a cart as a table.
#[allow(clippy::print_stdout)]
pub fn cart(view: &CartView) {
    if view.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in &view.items {
        let cap = if item.can_increment { "" } else { " (max)" };
        println!(
            "{:<16} {:<28} {:>4} x {:>10} = {:>10}{cap}",
            item.id, item.title, item.quantity, item.price, item.line_price
        );
    }
    println!("{} items, subtotal {}", view.item_count, view.subtotal);
}

/// Print notifications raised by the store.
#[allow(clippy::print_stderr)]
pub fn notifications(seen: &[Notification]) {
    for notification in seen {
        let label = match notification.kind {
            NotificationKind::Info => "info",
            NotificationKind::Success => "ok",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        };
        eprintln!("[{label}] {}", notification.message);
    }
}

/// Print a fatal error.
#[allow(clippy::print_stderr)]
pub fn fatal(error: &CartError) {
    eprintln!("error: {error}");
}
