/*
[INPUT]:  Profile, balance and card records from the client
[OUTPUT]: Display strings for the terminal
[POS]:    Presentation layer - formatting only, no I/O
[UPDATE]: When displayed fields change
*/

use console::style;
use kettik_client::{PaymentCard, UserProfile};
use rust_decimal::Decimal;

/// Currency sign shown next to amounts
pub const CURRENCY: &str = "₸";

/// `1 500.5 ₸`: grouped thousands, trailing zeros dropped
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.round_dp(2).normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction} {CURRENCY}"),
        None => format!("{sign}{grouped} {CURRENCY}"),
    }
}

fn field(label: &str, value: &str) -> String {
    let value = if value.trim().is_empty() { "—" } else { value };
    format!("  {:<14} {}", style(label).dim(), value)
}

pub fn profile(profile: &UserProfile) -> String {
    let verified = if profile.is_verified { "yes" } else { "no" };
    let mut lines = vec![
        style(profile.display_name()).bold().to_string(),
        field("Phone", &profile.phone_number),
        field("First name", &profile.first_name),
        field("Last name", &profile.last_name),
        field("Middle name", profile.middle_name.as_deref().unwrap_or_default()),
        field("Email", &profile.email),
        field("Birth date", &profile.birth_date),
        field("Verified", verified),
        field("Balance", &format_amount(profile.balance_amount())),
    ];
    if profile.has_active_rentals {
        lines.push(field("Rentals", "active"));
    }
    lines.join("\n")
}

pub fn balance(amount: Decimal) -> String {
    format!("{} {}", style("Balance:").dim(), style(format_amount(amount)).bold())
}

fn card_line(card: &PaymentCard) -> String {
    let mut tags = Vec::new();
    if card.is_default {
        tags.push(style("default").green().to_string());
    }
    if card.is_expired {
        tags.push(style("expired").red().to_string());
    }
    if !card.is_active {
        tags.push(style("inactive").dim().to_string());
    }

    let label = [card.card_type.as_str(), card.bank_name.as_str()]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ");

    format!(
        "  #{:<6} {:<20} {:<6} {} {}",
        card.id,
        card.masked_number,
        card.expiry(),
        label,
        tags.join(" ")
    )
    .trim_end()
    .to_string()
}

pub fn cards(cards: &[PaymentCard]) -> String {
    if cards.is_empty() {
        return style("No saved cards").dim().to_string();
    }
    cards.iter().map(card_line).collect::<Vec<_>>().join("\n")
}
