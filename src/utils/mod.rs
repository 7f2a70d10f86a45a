use chrono::{Datelike, NaiveDate};

pub const CRORE: u64 = 10_000_000;
pub const LAKH: u64 = 100_000;
pub const RUPEE: &str = "₹";
pub const PLACEHOLDER: &str = "—";

/// Enough fractional digits to print any finite f64 in our range exactly.
const EXACT_DIGITS: usize = 60;

// en-IN abbreviations; September is "Sept" there.
const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

pub fn format_currency(amount: u64) -> String {
    format_currency_with(amount, 1)
}

/// Crore band from 1 Cr, lakh band from 1 L, grouped rupees below that.
pub fn format_currency_with(amount: u64, decimals: usize) -> String {
    if amount >= CRORE {
        format_crore(amount, decimals)
    } else if amount >= LAKH {
        format_lakh(amount, decimals)
    } else {
        format!("{}{}", RUPEE, group_thousands(amount))
    }
}

pub fn format_crore(amount: u64, decimals: usize) -> String {
    format!("{}{}Cr", RUPEE, to_fixed(amount as f64 / CRORE as f64, decimals))
}

pub fn format_lakh(amount: u64, decimals: usize) -> String {
    format!("{}{}L", RUPEE, to_fixed(amount as f64 / LAKH as f64, decimals))
}

/// Penalty cell: lakh with one decimal, or "-" when nothing accrued.
pub fn format_penalty(amount: u64) -> String {
    format_penalty_with(amount, 1)
}

pub fn format_penalty_with(amount: u64, decimals: usize) -> String {
    if amount > 0 {
        format_lakh(amount, decimals)
    } else {
        "-".to_string()
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Fixed-point rendering that rounds the exact binary value, with exact ties
/// going up, the way `Number.prototype.toFixed` does.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|d| *d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|d| *d as char));
    }
    out
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", to_fixed(v, 1)),
        None => PLACEHOLDER.to_string(),
    }
}

/// "05 Mar"
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02} {}", date.day(), short_month(date))
}

/// "05 Mar 2024"
pub fn format_date_with_year(date: NaiveDate) -> String {
    format!("{} {}", format_date(date), date.year())
}

fn short_month(date: NaiveDate) -> &'static str {
    SHORT_MONTHS[date.month0() as usize]
}

/// Status label to CSS badge slug: lower-cased, first space becomes a dash.
pub fn badge_class(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}
