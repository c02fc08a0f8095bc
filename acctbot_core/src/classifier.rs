//! Splits free-form input into a display name and up to two numeric identifiers.
//!
//! Tokens can arrive in any order (`"0912345678 Lê Văn C 1122334455"`), so
//! numbers are told apart by digit length: 9 to 11 digits looks like a phone
//! number, anything else is taken as an account number.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use tracing::debug;

/// Digit lengths accepted as a phone number on the first pass.
const PHONE_LENGTHS: RangeInclusive<usize> = 9..=11;

/// Characters kept inside a token: word characters, whitespace and the
/// Latin-1/Vietnamese letter block.
static TOKEN_NOISE: OnceLock<regex::Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn token_noise() -> &'static regex::Regex {
    TOKEN_NOISE.get_or_init(|| {
        regex::Regex::new(r"[^\w\sÀ-ỹ]").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Decimal digits only (Unicode `Nd`), so letter numerals such as `Ⅻ` stay
/// part of the name.
static NUMBER: OnceLock<regex::Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn number() -> &'static regex::Regex {
    NUMBER.get_or_init(|| {
        regex::Regex::new(r"^\d+$").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Result of splitting one input message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classified {
    /// Non-numeric tokens joined by single spaces. May be empty.
    pub full_name: String,
    pub phone: Option<String>,
    pub account_number: Option<String>,
}

fn is_number(token: &str) -> bool {
    number().is_match(token)
}

fn digit_len(number: &str) -> usize {
    number.chars().count()
}

/// Classify raw text into name, phone and account number.
///
/// Only the first two numbers (in appearance order) are considered; any
/// further numeric tokens are dropped.
#[must_use]
pub fn classify(text: &str) -> Classified {
    let mut numbers = Vec::new();
    let mut words = Vec::new();

    for token in text.split_whitespace() {
        let clean = token_noise().replace_all(token, "");
        if is_number(&clean) {
            numbers.push(clean.into_owned());
        } else if !clean.is_empty() {
            words.push(clean.into_owned());
        }
    }

    if numbers.len() > 2 {
        debug!("Ignoring {} extra numeric tokens", numbers.len() - 2);
        numbers.truncate(2);
    }

    let (phone, account_number) = assign_numbers(&numbers);

    Classified {
        full_name: words.join(" "),
        phone,
        account_number,
    }
}

fn assign_numbers(numbers: &[String]) -> (Option<String>, Option<String>) {
    match numbers {
        [] => (None, None),
        [only] => (Some(only.clone()), None),
        _ => {
            let mut phone: Option<&String> = None;
            let mut account: Option<&String> = None;

            for number in numbers {
                if PHONE_LENGTHS.contains(&digit_len(number)) && phone.is_none() {
                    phone = Some(number);
                } else if account.is_none() {
                    account = Some(number);
                }
            }

            if phone.is_none() || account.is_none() {
                let mut by_len: Vec<&String> = numbers.iter().collect();
                by_len.sort_by_key(|n| digit_len(n));

                let shortest = by_len[0];
                phone = Some(if digit_len(shortest) <= *PHONE_LENGTHS.end() {
                    shortest
                } else {
                    by_len[1]
                });
                account = by_len.last().copied();
            }

            (phone.cloned(), account.cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn name_then_phone_then_account() {
        let c = classify("Nguyễn Văn A 0123456789 1234567890");
        assert_eq!(c.full_name, "Nguyễn Văn A");
        assert_eq!(c.phone, some("0123456789"));
        assert_eq!(c.account_number, some("1234567890"));
    }

    #[test]
    fn token_order_does_not_matter() {
        let c = classify("0912345678 Lê Văn C 1122334455");
        assert_eq!(c.full_name, "Lê Văn C");
        assert_eq!(c.phone, some("0912345678"));
        assert_eq!(c.account_number, some("1122334455"));
    }

    #[test]
    fn no_numbers_leaves_both_unset() {
        let c = classify("Trần   Thị\tB");
        assert_eq!(c.full_name, "Trần Thị B");
        assert_eq!(c.phone, None);
        assert_eq!(c.account_number, None);
    }

    #[test]
    fn single_number_is_always_phone() {
        for input in ["Lê C 12", "Lê C 0912345678", "Lê C 123456789012345"] {
            let c = classify(input);
            assert_eq!(c.full_name, "Lê C");
            assert!(c.phone.is_some(), "{input}");
            assert_eq!(c.account_number, None, "{input}");
        }
    }

    #[test]
    fn punctuation_is_stripped() {
        let c = classify("Phạm, Văn. D: 0912-345-678 (VCB)");
        assert_eq!(c.full_name, "Phạm Văn D VCB");
        assert_eq!(c.phone, some("0912345678"));
        assert_eq!(c.account_number, None);
    }

    #[test]
    fn tokens_that_vanish_are_dropped() {
        let c = classify("--- Hoa *** 0912345678");
        assert_eq!(c.full_name, "Hoa");
        assert_eq!(c.phone, some("0912345678"));
    }

    #[test]
    fn account_first_then_phone() {
        let c = classify("Hoa 123456789012 0912345678");
        assert_eq!(c.phone, some("0912345678"));
        assert_eq!(c.account_number, some("123456789012"));
    }

    #[test]
    fn two_phone_length_numbers_keep_appearance_order() {
        let c = classify("Hoa 098765432 0912345678");
        assert_eq!(c.phone, some("098765432"));
        assert_eq!(c.account_number, some("0912345678"));
    }

    #[test]
    fn fallback_picks_shortest_as_phone() {
        // Neither number has a phone-like length, so the greedy pass only
        // fills the account slot and the length sort decides.
        let c = classify("Hoa 123456789012345 12345");
        assert_eq!(c.phone, some("12345"));
        assert_eq!(c.account_number, some("123456789012345"));
    }

    #[test]
    fn fallback_with_two_long_numbers_reuses_longest() {
        let c = classify("Hoa 123456789012 1234567890123");
        assert_eq!(c.phone, some("1234567890123"));
        assert_eq!(c.account_number, some("1234567890123"));
    }

    #[test]
    fn only_first_two_numbers_count() {
        let c = classify("Hoa 0912345678 1122334455 999");
        assert_eq!(c.full_name, "Hoa");
        assert_eq!(c.phone, some("0912345678"));
        assert_eq!(c.account_number, some("1122334455"));
    }

    #[test]
    fn letter_numerals_stay_in_the_name() {
        let c = classify("Lê Ⅻ Thị");
        assert_eq!(c.full_name, "Lê Ⅻ Thị");
        assert_eq!(c.phone, None);
        assert_eq!(c.account_number, None);
    }

    #[test]
    fn non_ascii_decimal_digits_are_numbers() {
        let c = classify("Hoa ٠٩١٢٣٤٥٦٧٨");
        assert_eq!(c.full_name, "Hoa");
        assert_eq!(c.phone, some("٠٩١٢٣٤٥٦٧٨"));
    }

    #[test]
    fn digits_only_input_has_no_name() {
        let c = classify("0912345678 1122334455");
        assert!(c.full_name.is_empty());
    }

    #[test]
    fn mixed_alphanumeric_token_is_a_word() {
        let c = classify("Hoa A1 0912345678");
        assert_eq!(c.full_name, "Hoa A1");
        assert_eq!(c.phone, some("0912345678"));
    }
}
