//! Cent-amount formatting for prices and order totals.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format a cent amount as dollars, e.g. `4500` -> `"$45.00"`.
pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Format an event's cheapest price; zero means free entry.
pub fn format_price(cents: u32) -> String {
    if cents == 0 {
        "Free".to_owned()
    } else {
        format!("From {}", format_cents(cents))
    }
}
