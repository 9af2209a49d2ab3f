//! Field validation rules shared by the dashboard forms.
//!
//! Each rule is a pure predicate returning the inline message to display, or
//! `None` when the field passes. Nothing here touches the network; the server
//! enforces the same constraints again and remains authoritative.

pub const TEXT_MIN: usize = 2;
pub const TEXT_MAX: usize = 50;
pub const PRICE_MIN: f64 = 0.5;
pub const PRICE_STEP: f64 = 0.5;

fn text_field(value: &str, required_msg: &str, blank_msg: &str, length_msg: &str) -> Option<String> {
    if value.is_empty() {
        return Some(required_msg.to_string());
    }
    if value.trim().is_empty() {
        return Some(blank_msg.to_string());
    }
    let len = value.chars().count();
    if !(TEXT_MIN..=TEXT_MAX).contains(&len) {
        return Some(length_msg.to_string());
    }
    None
}

pub fn validate_name(value: &str) -> Option<String> {
    text_field(
        value,
        "Enter a name",
        "Name cannot be blank",
        "Name must be 2-50 length",
    )
}

pub fn validate_description(value: &str) -> Option<String> {
    text_field(
        value,
        "Enter order description",
        "Description cannot be blank",
        "Description must be 2-50 length",
    )
}

pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Enter an email".to_string());
    }
    if !is_valid_email(value) {
        return Some("Invalid email format".to_string());
    }
    None
}

pub fn validate_price(value: Option<f64>) -> Option<String> {
    match value {
        None => Some("Enter order price".to_string()),
        Some(_) => None,
    }
}

/// Syntactic email check: one `@`, a non-empty local part, and a dotted domain
/// with non-empty labels. Deliverability is not our problem.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Snaps a price onto the 0.5 grid with a 0.5 floor. The input control calls
/// this on every edit, so out-of-range prices are unreachable rather than
/// rejected with a validation error.
pub fn snap_price(value: f64) -> f64 {
    let snapped = (value / PRICE_STEP).round() * PRICE_STEP;
    snapped.max(PRICE_MIN)
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
