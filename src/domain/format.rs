// src/domain/format.rs

use crate::domain::Cents;

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

/// `$2,450`: rounded to whole dollars, half away from zero.
pub fn currency(amount: Cents) -> String {
    let half = if amount.0 >= 0 { 50 } else { -50 };
    let rounded = amount.0.saturating_add(half) / 100;
    format!("${}", group_thousands(rounded))
}

/// `$2,450.00`
pub fn currency_cents(amount: Cents) -> String {
    format!(
        "${}.{:02}",
        group_thousands(amount.dollars()),
        amount.cents_part()
    )
}

/// Compact figure for stat cards: `$1.2M`, `$14K`, otherwise `currency`.
pub fn compact_amount(amount: Cents) -> String {
    let dollars = amount.as_f64();
    if dollars >= 1_000_000.0 {
        format!("${:.1}M", dollars / 1_000_000.0)
    } else if dollars >= 1_000.0 {
        format!("${:.0}K", dollars / 1_000.0)
    } else {
        currency(amount)
    }
}
