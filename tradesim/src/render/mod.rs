use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use serde::Serialize;

/// [`ResultView`](view::ResultView) mapping a
/// [`SimulationResult`](crate::model::result::SimulationResult) into display rows, and the
/// [`TablePrinter`](view::TablePrinter) that prints them.
pub mod view;

const PERCENTAGE_DECIMALS: u32 = 2;
const MIN_FRACTION_DIGITS: u32 = 2;
const MAX_FRACTION_DIGITS: u32 = 4;

/// Presentation class of a displayed number, derived purely from its sign.
///
/// Carries no judgement of whether the number is favourable (eg/ a negative net cost).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignClass {
    Positive,
    Negative,
}

impl SignClass {
    /// `Positive` iff `value >= 0`. `NaN` is `Negative`.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            SignClass::Positive
        } else {
            SignClass::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignClass::Positive => "positive",
            SignClass::Negative => "negative",
        }
    }
}

/// Display-ready number: formatted text plus its [`SignClass`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct DisplayValue {
    pub text: String,
    pub class: SignClass,
}

/// Format a raw service value for display. See [`format_value`] and [`SignClass::of`].
pub fn format(value: f64, is_percentage: bool) -> DisplayValue {
    DisplayValue {
        text: format_value(value, is_percentage),
        class: SignClass::of(value),
    }
}

/// Format a raw service value as text.
///
/// Percentages are multiplied by 100, fixed to 2 decimals and suffixed with `%` (eg/ `0.001`
/// -> `0.10%`). Plain numbers use `,` thousands separators and 2 to 4 fraction digits (eg/
/// `1234567.891` -> `1,234,567.891`). Midpoints round away from zero.
pub fn format_value(value: f64, is_percentage: bool) -> String {
    if is_percentage {
        format_percentage(value)
    } else {
        format_number(value)
    }
}

fn format_percentage(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity%");
    }

    let percent = Decimal::from_f64(value)
        .and_then(|value| value.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| fixed(percent, PERCENTAGE_DECIMALS, PERCENTAGE_DECIMALS));

    match percent {
        Some(percent) => format!("{percent}%"),
        None => match value * 100.0 {
            percent if percent.is_infinite() => format_percentage(percent),
            percent => format!("{}%", shortest(percent, PERCENTAGE_DECIMALS)),
        },
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}∞");
    }

    let number = match Decimal::from_f64(value) {
        Some(number) => fixed(number, MIN_FRACTION_DIGITS, MAX_FRACTION_DIGITS),
        None => shortest(value, MIN_FRACTION_DIGITS),
    };

    group_thousands(&number)
}

/// Round to at most `max` fraction digits, then pad to at least `min`.
fn fixed(value: Decimal, min: u32, max: u32) -> String {
    let mut value = value
        .round_dp_with_strategy(max, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    if value.scale() < min {
        value.rescale(min);
    }
    if value.is_zero() {
        value.set_sign_positive(true);
    }

    value.to_string()
}

/// Shortest round-trip digits of a value beyond [`Decimal`] range, padded to `min` fraction
/// digits.
fn shortest(value: f64, min: u32) -> String {
    let mut number = value.to_string();
    if !number.contains('.') {
        number.push('.');
        number.extend(std::iter::repeat_n('0', min as usize));
    }
    number
}

/// Insert `,` between every group of three integer digits of a plain decimal string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}
