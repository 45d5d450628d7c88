//! Form state for the two "add" dialogs and the field coercions they need.
//!
//! Inputs are controlled: every field lives in the form struct as the raw text
//! the user typed, and [`PropertyForm::to_draft`] / [`CustomerForm::to_draft`]
//! build the request body at submit time. Resetting a form is assigning
//! `Default::default()`.

use store::{CustomerStatus, NewCustomer, NewProperty};

/// Fields of `#add-property-form`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyForm {
    pub title: String,
    pub address: String,
    pub description: String,
    pub price: String,
}

impl PropertyForm {
    pub fn to_draft(&self) -> NewProperty {
        NewProperty {
            title: self.title.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            price: parse_float(&self.price),
        }
    }
}

/// Fields of `#add-customer-form`. New customers are always `Active`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerForm {
    pub fn to_draft(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: CustomerStatus::Active,
        }
    }
}

/// Locale-agnostic float parsing with the browser's `parseFloat` rules:
/// leading whitespace is skipped, the longest numeric prefix wins, and input
/// with no numeric prefix yields NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let bytes = unsigned.as_bytes();
    let mut end = 0;
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    unsigned[..end]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("150000"), 150000.0);
        assert_eq!(parse_float("12.5"), 12.5);
        assert_eq!(parse_float("-.5"), -0.5);
        assert_eq!(parse_float("+3."), 3.0);
    }

    #[test]
    fn test_parse_float_prefix_rules() {
        assert_eq!(parse_float("  12.5abc"), 12.5);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2E-2"), 0.02);
        assert_eq!(parse_float("150.000,00"), 150.0);
        assert_eq!(parse_float("Infinityx"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("Rp 1000").is_nan());
    }

    #[test]
    fn test_property_form_draft() {
        let form = PropertyForm {
            title: "Unit A".to_string(),
            address: "Jl. Test".to_string(),
            description: "Two bedrooms".to_string(),
            price: "150000".to_string(),
        };
        let draft = form.to_draft();
        assert_eq!(draft.title, "Unit A");
        assert_eq!(draft.price, 150000.0);
    }

    #[test]
    fn test_customer_form_draft_is_active() {
        let form = CustomerForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
        };
        let draft = form.to_draft();
        assert_eq!(draft.status, CustomerStatus::Active);
        assert_eq!(draft.phone, "");
    }
}
