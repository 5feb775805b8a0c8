//! Indian-rupee amount formatting for display.
//!
//! Grouping follows the Indian system: the last three integer digits form one
//! group and the remaining digits are grouped in pairs (`12,34,567`). Paise
//! are shown with two digits only when the amount is not a whole rupee.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

const RUPEE: char = '₹';

/// Format `amount` (in rupees) as a localized INR string, e.g. `₹15,000`.
///
/// Non-finite amounts render as `₹0`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{RUPEE}0");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_paise = (amount.abs() * 100.0).round() as u64;
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    let mut out = String::new();
    if amount < 0.0 && total_paise > 0 {
        out.push('-');
    }
    out.push(RUPEE);
    out.push_str(&group_indian(rupees));
    if paise > 0 {
        out.push_str(&format!(".{paise:02}"));
    }
    out
}

/// Insert Indian-system group separators into a whole number.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
