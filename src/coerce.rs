//! Value coercion.
//!
//! Turns a [`Cell`] into a dialect-neutral [`Literal`] given the column's
//! declared SQL type. Rules are applied in priority order:
//!
//! 1. covered and empty cells are NULL
//! 2. textual columns keep the display text a human sees, verbatim
//! 3. textual columns without display text render percentages from the style
//! 4. numeric cells become numbers in fixed notation
//! 5. booleans stay booleans
//! 6. dates are kept as stored, times are converted to `HH:MM:SS[.fff]`
//! 7. the empty string is NULL

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::sheet::{Cell, PercentStyle, StyleTable, ValueType};
use crate::sql::Literal;

/// Non-breaking space placed before `%` in comma-decimal locales.
const NBSP: char = '\u{a0}';

/// Largest decimal-point shift expanded textually (doubles stop near 1E+308).
const MAX_EXPONENT_SHIFT: u64 = 400;

/// Whether a declared SQL type is textual (`TEXT`, `TEXT(20)`, ...).
pub fn is_textual(declared_type: &str) -> bool {
    declared_type.trim().to_uppercase().starts_with("TEXT")
}

fn names_percentage(declared_type: &str) -> bool {
    declared_type.to_uppercase().contains("PERCENT")
}

/// Coerce one cell for a column of type `declared_type`.
pub fn coerce(cell: &Cell, declared_type: &str, styles: &StyleTable) -> Literal {
    if matches!(cell.value_type, ValueType::Covered | ValueType::Empty) {
        return Literal::Null;
    }

    let textual = is_textual(declared_type);

    if textual {
        if let Some(display) = cell.display() {
            return Literal::String(display.to_string());
        }
        let percent_like = cell.value_type == ValueType::Percentage
            || (names_percentage(declared_type) && parse_decimal(&cell.raw_value).is_some());
        if percent_like {
            let style = cell
                .style_id
                .as_deref()
                .and_then(|id| styles.percent_style(id))
                .copied()
                .unwrap_or_default();
            if let Some(text) = format_percent(&cell.raw_value, &style) {
                return Literal::String(text);
            }
        }
    }

    match &cell.value_type {
        ValueType::Float | ValueType::Currency | ValueType::Percentage => {
            match fixed_notation(&cell.raw_value) {
                Some(n) if textual => Literal::String(n),
                Some(n) => Literal::Number(n),
                None => Literal::string(cell.raw_value.clone()),
            }
        }
        ValueType::Boolean => match cell.raw_value.trim().to_ascii_lowercase().as_str() {
            "true" => Literal::Bool(true),
            "false" => Literal::Bool(false),
            _ => Literal::string(cell.raw_value.clone()),
        },
        ValueType::Date => Literal::string(cell.raw_value.clone()),
        ValueType::Time => Literal::string(
            duration_to_clock(&cell.raw_value).unwrap_or_else(|| cell.raw_value.clone()),
        ),
        ValueType::String | ValueType::Other(_) => Literal::string(cell.raw_value.clone()),
        ValueType::Covered | ValueType::Empty => Literal::Null,
    }
}

/// Parse a decimal, accepting scientific notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if s.contains(['e', 'E']) {
        Decimal::from_scientific(s).ok()
    } else {
        Decimal::from_str(s).ok()
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut parts = digits.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let frac = parts.next();
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && match frac {
            Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
            None => true,
        }
}

/// Render a numeric value in fixed (non-scientific) notation, keeping the
/// stored scale.
///
/// Plain decimals too large for exact arithmetic are passed through as written;
/// scientific values outside that range are expanded digit by digit.
pub fn fixed_notation(raw: &str) -> Option<String> {
    let s = raw.trim();
    match parse_decimal(s) {
        Some(d) => Some(d.to_string()),
        None if is_plain_decimal(s) => Some(s.to_string()),
        None => expand_scientific(s),
    }
}

/// Move the decimal point of `1.5E-30` style text by its exponent, padding
/// with zeros: `1E+3` → `1000`, `1.5E-3` → `0.0015`.
fn expand_scientific(s: &str) -> Option<String> {
    let (mantissa, exponent) = s.split_once(['e', 'E'])?;
    let exponent: i64 = exponent
        .strip_prefix('+')
        .unwrap_or(exponent)
        .parse()
        .ok()?;
    if exponent.unsigned_abs() > MAX_EXPONENT_SHIFT {
        return None;
    }
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    if !is_plain_decimal(mantissa) {
        return None;
    }

    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int}{frac}");
    let point = int.len() as i64 + exponent;

    let (int_digits, frac_digits) = if point <= 0 {
        ("0".to_string(), format!("{}{digits}", "0".repeat(point.unsigned_abs() as usize)))
    } else if point as usize >= digits.len() {
        let padding = "0".repeat(point as usize - digits.len());
        (format!("{digits}{padding}"), String::new())
    } else {
        let (i, f) = digits.split_at(point as usize);
        (i.to_string(), f.to_string())
    };

    let int_digits = match int_digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(int_digits);
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(&frac_digits);
    }
    Some(out)
}

/// Render a fraction as a percentage: `0.375` → `37.5%`.
///
/// The value is multiplied by 100, rounded half-up to the style's decimal
/// places and stripped of trailing zeros. A comma separator also puts a
/// non-breaking space before the `%` sign.
pub fn format_percent(raw: &str, style: &PercentStyle) -> Option<String> {
    let value = parse_decimal(raw)?;
    let pct = value
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(style.places(), RoundingStrategy::MidpointAwayFromZero);

    let mut s = pct.to_string();
    if s.contains('.') {
        s = s.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    if style.decimal_separator == '.' {
        s.push('%');
    } else {
        s = s.replace('.', &style.decimal_separator.to_string());
        s.push(NBSP);
        s.push('%');
    }
    Some(s)
}

/// Convert an ODS duration (`PT13H45M30S`, `PT01H02M03.250S`) to
/// `HH:MM:SS[.fff]`.
///
/// Day components fold into hours. Returns `None` for anything else.
pub fn duration_to_clock(raw: &str) -> Option<String> {
    let s = raw.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let body = s.strip_prefix('P')?;
    let (date_part, time_part) = match body.split_once('T') {
        Some((d, t)) => (d, t),
        None => (body, ""),
    };

    let mut hours: u64 = 0;
    if !date_part.is_empty() {
        let days = date_part.strip_suffix('D')?;
        hours = days.parse::<u64>().ok()?.checked_mul(24)?;
    }

    let mut minutes: u64 = 0;
    let mut seconds = String::from("0");
    let mut rest = time_part;
    let mut seen_any = !date_part.is_empty();
    while !rest.is_empty() {
        let end = rest.find(|c: char| c.is_ascii_alphabetic())?;
        let (num, tail) = rest.split_at(end);
        let mut unit = tail.chars();
        let designator = unit.next()?;
        rest = unit.as_str();
        if num.is_empty() {
            return None;
        }
        match designator {
            'H' => hours = hours.checked_add(num.parse().ok()?)?,
            'M' => minutes = num.parse().ok()?,
            'S' => {
                if !is_plain_decimal(num) {
                    return None;
                }
                seconds = num.to_string();
            }
            _ => return None,
        }
        seen_any = true;
    }
    if !seen_any {
        return None;
    }

    let (whole, frac) = match seconds.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (seconds.as_str(), None),
    };
    let whole: u64 = whole.parse().ok()?;

    let mut out = format!(
        "{}{:02}:{:02}:{:02}",
        if negative { "-" } else { "" },
        hours,
        minutes,
        whole
    );
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    Some(out)
}
