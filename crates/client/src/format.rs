//! Display formatting for car fields (pt-BR).
//!
//! Missing values (`None`, empty strings, zero) render as a placeholder
//! label rather than an error. Dates are rendered in UTC.

use carcatalog_core::fuel::FuelType;
use carcatalog_core::types::UnixSeconds;
use chrono::DateTime;

/// Model-name tokens that stay uppercase.
const UPPERCASE_TOKENS: &[&str] = &["SUV", "GT", "RS", "AMG", "M", "S", "X", "Y"];

/// `R$ 1.234,56`
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.is_finite() => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}R$ {}", group_decimal(value.abs()))
        }
        _ => "Preço não informado".to_string(),
    }
}

/// `1.234,56`, without the currency symbol.
pub fn format_price_number(price: Option<f64>) -> String {
    match price {
        Some(value) if value.is_finite() => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}{}", group_decimal(value.abs()))
        }
        _ => "0,00".to_string(),
    }
}

/// Two decimals, `,` as decimal separator and `.` between thousands.
fn group_decimal(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }
    format!("{grouped},{frac_part}")
}

/// `dd/mm/yyyy` from Unix seconds.
pub fn format_date(timestamp: UnixSeconds) -> String {
    format_timestamp(timestamp, "%d/%m/%Y")
}

/// `dd/mm/yyyy, HH:MM` from Unix seconds.
pub fn format_date_time(timestamp: UnixSeconds) -> String {
    format_timestamp(timestamp, "%d/%m/%Y, %H:%M")
}

fn format_timestamp(timestamp: UnixSeconds, pattern: &str) -> String {
    if timestamp == 0 {
        return "Data não informada".to_string();
    }
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => date.format(pattern).to_string(),
        None => "Data inválida".to_string(),
    }
}

/// Label for a stored fuel value; unknown values are returned unchanged.
pub fn format_fuel(fuel: &str) -> String {
    if fuel.is_empty() {
        return "Não informado".to_string();
    }
    fuel.parse::<FuelType>()
        .map(|f| f.label().to_string())
        .unwrap_or_else(|_| fuel.to_string())
}

pub fn format_color(color: &str) -> String {
    if color.is_empty() {
        return "Não informada".to_string();
    }
    capitalize(color)
}

/// `1 porta`, `4 portas`
pub fn format_doors(doors: i32) -> String {
    match doors {
        0 => "Não informado".to_string(),
        1 => "1 porta".to_string(),
        n => format!("{n} portas"),
    }
}

pub fn format_year(year: i32) -> String {
    if year == 0 {
        return "Ano não informado".to_string();
    }
    year.to_string()
}

pub fn format_brand(brand: &str) -> String {
    if brand.is_empty() {
        return "Marca não informada".to_string();
    }
    capitalize_words(brand)
}

/// Capitalize each word, keeping trim-level tokens like `SUV` uppercase.
pub fn format_model(model: &str) -> String {
    if model.is_empty() {
        return "Modelo não informado".to_string();
    }
    model
        .split(' ')
        .map(|word| {
            let upper = word.to_uppercase();
            if UPPERCASE_TOKENS.contains(&upper.as_str()) {
                upper
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character uppercase, the rest lowercase.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn capitalize_words(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}
