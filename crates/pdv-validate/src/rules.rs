//! Field rules.
//!
//! Each rule is a pure predicate over one already-typed field value. Type
//! conversion (and its failure) is the classifier's job; a rule only decides
//! whether a well-typed value is acceptable.

use std::sync::LazyLock;

use pdv_model::RecordField;
use regex::Regex;

use crate::config::RuleConfig;

/// `+D-(DDD)-DDD-DD-DD` with ASCII digits.
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]-\([0-9]{3}\)-[0-9]{3}-[0-9]{2}-[0-9]{2}$")
        .expect("Invalid telephone regex")
});

/// Optional street token, then a street name with at least one letter, then
/// the house number.
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?i:ул\.|улица|ул|street|st\.)\s+)?[\w .-]*\p{L}[\w .-]*[0-9]+$")
        .expect("Invalid address regex")
});

/// Decimal digits (Unicode `Nd`) in any script.
static DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

/// Weight bounds, both exclusive.
pub const WEIGHT_MIN: i64 = 40;
pub const WEIGHT_MAX: i64 = 120;

/// Age bounds, both inclusive.
pub const AGE_MIN: i64 = 0;
pub const AGE_MAX: i64 = 100;

pub const SNILS_LENGTH: usize = 11;
pub const PASSPORT_NUMBER_LENGTH: usize = 6;

pub fn telephone(value: &str) -> bool {
    TELEPHONE_REGEX.is_match(value)
}

pub fn weight(value: i64) -> bool {
    value > WEIGHT_MIN && value < WEIGHT_MAX
}

pub fn snils(value: &str) -> bool {
    is_fixed_length_digits(value, SNILS_LENGTH)
}

pub fn passport_number(value: &str) -> bool {
    is_fixed_length_digits(value, PASSPORT_NUMBER_LENGTH)
}

/// Capitalized in the configured alphabet, no digits after the first letter,
/// and not blocklisted.
pub fn occupation(value: &str, config: &RuleConfig) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    config.alphabet.is_uppercase_letter(first)
        && contains_no_digits(chars.as_str())
        && !config.is_blocked(RecordField::Occupation, value)
}

pub fn age(value: i64) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&value)
}

pub fn political_views(value: &str, config: &RuleConfig) -> bool {
    contains_no_digits(value) && !config.is_blocked(RecordField::PoliticalViews, value)
}

pub fn worldview(value: &str, config: &RuleConfig) -> bool {
    contains_no_digits(value) && !config.is_blocked(RecordField::Worldview, value)
}

pub fn address(value: &str) -> bool {
    ADDRESS_REGEX.is_match(value)
}

/// True when `value` has no decimal digit in any script. Numerals that are
/// not digits (`Ⅻ`, `²`, `½`) are allowed.
pub fn contains_no_digits(value: &str) -> bool {
    !DIGIT_REGEX.is_match(value)
}

fn is_fixed_length_digits(value: &str, length: usize) -> bool {
    value.len() == length && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// One-line description of the rule applied to `field`.
pub fn describe(field: RecordField) -> &'static str {
    match field {
        RecordField::Telephone => "matches +D-(DDD)-DDD-DD-DD",
        RecordField::Weight => "integer strictly between 40 and 120",
        RecordField::Snils => "exactly 11 digits",
        RecordField::PassportNumber => "exactly 6 digits (text or number)",
        RecordField::Occupation => {
            "starts with a capital letter, no digits, not blocklisted"
        }
        RecordField::Age => "integer from 0 to 100 inclusive",
        RecordField::PoliticalViews => "no digits, not blocklisted",
        RecordField::Worldview => "no digits, not blocklisted",
        RecordField::Address => "optional street token, street name, house number",
    }
}
