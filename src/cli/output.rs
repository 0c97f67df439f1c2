//! Output formatting utilities

use crate::domain::Quote;

/// Format a single quote for display
pub fn format_quote(quote: &Quote) -> String {
    format!("\"{}\"\n  - {}", quote.text, quote.category)
}

/// Format a list of quotes for display
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found".to_string();
    }

    let mut output = String::new();
    for quote in quotes {
        output.push_str(&format!("[{}] {}\n", quote.category, quote.text));
    }
    output
}

/// Format a list of categories for display
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!("{}\n", category));
    }
    output
}
