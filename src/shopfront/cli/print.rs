use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use once_cell::sync::Lazy;
use shopfront::api::{CmdMessage, Listing, MessageLevel};
use shopfront::cart::Cart;
use shopfront::catalog::{self, COLORS, GENDERS, PRICE_RANGES, SIZES};
use shopfront::config::ShopConfig;
use shopfront::filters::SortKey;
use shopfront::model::Product;
use std::collections::HashMap;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const BADGE_WIDTH: usize = 13;
const PRICE_WIDTH: usize = 20;
const TIME_WIDTH: usize = 14;

/// Swatch colors parsed from the catalog's hex codes.
static SWATCHES: Lazy<HashMap<&'static str, (u8, u8, u8)>> = Lazy::new(|| {
    COLORS
        .iter()
        .filter_map(|c| parse_hex(c.hex).map(|rgb| (c.value, rgb)))
        .collect()
});

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled_message(message));
    }
}

/// Messages on stderr, for commands whose stdout is machine-readable.
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", styled_message(message));
    }
}

fn styled_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    }
}

pub(super) fn print_listing(products: &[Product], listing: &Listing) {
    let mut header = format!(
        "{} {}",
        listing.total_items,
        if listing.total_items == 1 { "product" } else { "products" }
    );
    if listing.active_filters > 0 {
        header.push_str(&format!(
            " · {} filter{} applied",
            listing.active_filters,
            if listing.active_filters == 1 { "" } else { "s" }
        ));
    }
    println!(
        "{}{}",
        header.bold(),
        format!("   Sort: {}", catalog::sort_label(listing.sort)).dimmed()
    );

    if !listing.badges.is_empty() {
        let chips: Vec<String> = listing
            .badges
            .iter()
            .map(|b| format!("[{} ×]", b.label))
            .collect();
        println!("{}", chips.join(" ").cyan());
    }
    println!();

    if listing.total_items == 0 {
        if listing.catalog_size == 0 {
            println!("No products in the catalog. Run `shopfront seed` to load the demo catalog.");
        } else {
            println!("No products found.");
            println!("{}", "Try adjusting your filters, or run `shopfront clear`.".dimmed());
        }
        return;
    }

    if products.is_empty() {
        println!(
            "Page {} is past the end ({} pages).",
            listing.page, listing.total_pages
        );
        return;
    }

    for product in products {
        print_product_line(product);
    }

    if listing.total_pages > 1 {
        println!();
        println!(
            "{}",
            format!("Page {} of {}", listing.page, listing.total_pages).dimmed()
        );
    }
}

fn print_product_line(product: &Product) {
    let badge = match &product.badge {
        Some(b) => truncate_to_width(b, BADGE_WIDTH - 1),
        None => String::new(),
    };
    let badge_padding = BADGE_WIDTH.saturating_sub(badge.width());

    let price_plain = price_text(product);
    let price_padding = PRICE_WIDTH.saturating_sub(price_plain.width());

    let mut title = product.name.clone();
    if !product.category.is_empty() {
        title = format!("{} · {}", title, product.category);
    }
    let fixed_width = 2 + BADGE_WIDTH + PRICE_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&title, available);
    let title_padding = available.saturating_sub(title_display.width());

    println!(
        "  {}{}{}{}{}{}{}",
        badge.yellow(),
        " ".repeat(badge_padding),
        title_display,
        " ".repeat(title_padding),
        " ".repeat(price_padding),
        colored_price(product),
        format_time_ago(product.created_at).dimmed()
    );
}

fn price_text(product: &Product) -> String {
    let current = format_price(product.effective_price());
    if product.is_on_sale() {
        format!("{} {}", current, format_price(product.price))
    } else {
        current
    }
}

fn colored_price(product: &Product) -> String {
    let current = format_price(product.effective_price());
    if product.is_on_sale() {
        format!(
            "{} {}",
            current.red().bold(),
            format_price(product.price).dimmed().strikethrough()
        )
    } else {
        current.bold().to_string()
    }
}

fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Print the next query string on its own line, for capture by scripts.
pub(super) fn print_query(query: &str) {
    println!("{}", query);
}

pub(super) fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    let available = LINE_WIDTH.saturating_sub(PRICE_WIDTH + 8);
    for item in &cart.items {
        let name = truncate_to_width(&item.name, available);
        let padding = available.saturating_sub(name.width());
        let total = format_price(item.line_total());
        println!(
            "  {:>3} × {}{}{:>width$}",
            item.quantity,
            name,
            " ".repeat(padding),
            total,
            width = PRICE_WIDTH
        );
    }

    let count = cart.item_count();
    println!();
    println!(
        "  {} {}",
        format!("{} item{}", count, if count == 1 { "" } else { "s" }).dimmed(),
        format!("Total: {}", format_price(cart.total_price())).bold()
    );
}

pub(super) fn print_options() {
    let genders: Vec<&str> = GENDERS.iter().map(|g| g.value).collect();
    println!("{} {}", "gender".bold(), genders.join(", "));

    let sizes: Vec<String> = SIZES
        .iter()
        .map(|s| urlencoding::encode(s.value).into_owned())
        .collect();
    println!("{} {}", "size".bold(), sizes.join(", "));

    let colors: Vec<String> = COLORS
        .iter()
        .map(|c| match SWATCHES.get(c.value) {
            Some(&(r, g, b)) => format!("{} {}", "●".truecolor(r, g, b), c.value),
            None => c.value.to_string(),
        })
        .collect();
    println!("{} {}", "color".bold(), colors.join("  "));

    println!("{}", "price".bold());
    for range in PRICE_RANGES {
        println!(
            "  {:<14}{}",
            range.label,
            format!("minPrice={}&maxPrice={}", range.min, range.max).dimmed()
        );
    }

    println!("{}", "sort".bold());
    for sort in SortKey::ALL {
        println!(
            "  {:<20}{}",
            catalog::sort_label(sort),
            sort.as_param().dimmed()
        );
    }
}

pub(super) fn print_config(config: &ShopConfig) {
    println!("page-size = {}", config.page_size);
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
