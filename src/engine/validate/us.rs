use std::sync::OnceLock;

use regex::Regex;

use super::Violation;

/// Two-letter codes for US states, DC, territories, and armed-forces
/// addresses. Membership is checked after uppercasing.
pub const VALID_STATE_CODES: [&str; 59] = [
    "AA", "AE", "AK", "AL", "AP", "AR", "AS", "AZ", "CA", "CO", "CT", "DC",
    "DE", "FL", "GA", "GU", "HI", "IA", "ID", "IL", "IN", "KS", "KY", "LA",
    "MA", "MD", "ME", "MI", "MN", "MO", "MP", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "PR", "RI", "SC",
    "SD", "TN", "TX", "UT", "VA", "VI", "VT", "WA", "WI", "WV", "WY",
];

pub const MSG_INVALID_ZIP: &str = "The zip code must be in the format ##### or #####-####";
pub const MSG_INVALID_PHONE: &str =
    "Please enter a phone number with area code in the format 555-867-5309";
pub const MSG_BAD_AREA_CODE: &str = "Phone area codes cannot begin with a \"1\" or \"0\"";
pub const MSG_INVALID_STATE: &str = "Enter a valid 2-letter U.S. state or territory code.";

fn zip_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{5}(?:-\d{4})?$").expect("zip pattern compiles"))
}

fn phone_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^1?(\d{3})(\d{3})(\d{4})$").expect("phone pattern compiles"))
}

fn phone_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-.()\s]").expect("separator pattern compiles"))
}

/// Validate a US zip code (`#####` or `#####-####`). Normalization is the
/// identity: the accepted value is already canonical.
pub fn convert_zip_code(value: &str) -> Result<String, Violation> {
    if zip_code_re().is_match(value) {
        Ok(value.to_string())
    } else {
        Err(Violation::new("invalid_zip", MSG_INVALID_ZIP))
    }
}

/// Validate a US phone number and normalize it to `AAA-BBB-CCCC`.
///
/// Dots, dashes, parentheses, and whitespace are stripped before matching;
/// an optional leading `1` is dropped. Area codes starting with `0` or `1`
/// are rejected.
pub fn convert_phone_number(value: &str) -> Result<String, Violation> {
    let digits = phone_strip_re().replace_all(value, "");
    let captures = phone_digits_re()
        .captures(&digits)
        .ok_or_else(|| Violation::new("invalid_phone", MSG_INVALID_PHONE))?;
    let area = &captures[1];
    if area.starts_with('0') || area.starts_with('1') {
        return Err(Violation::new("bad_area_code", MSG_BAD_AREA_CODE));
    }
    Ok(format!("{area}-{}-{}", &captures[2], &captures[3]))
}

/// Validate a US state or territory code, normalizing to upper case.
pub fn convert_state_code(value: &str) -> Result<String, Violation> {
    let code = value.to_uppercase();
    if VALID_STATE_CODES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(Violation::new("invalid_state", MSG_INVALID_STATE))
    }
}
