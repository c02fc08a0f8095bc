//! Username, password and birthday synthesis from a display name.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::warn;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Tunables for credential synthesis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Earliest birth year, inclusive
    #[serde(default = "GeneratorConfig::default_birth_year_min")]
    pub birth_year_min: i32,
    /// Latest birth year, inclusive
    #[serde(default = "GeneratorConfig::default_birth_year_max")]
    pub birth_year_max: i32,
    /// Pool the password's special characters are drawn from
    #[serde(default = "GeneratorConfig::default_special_chars")]
    pub special_chars: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            birth_year_min: Self::default_birth_year_min(),
            birth_year_max: Self::default_birth_year_max(),
            special_chars: Self::default_special_chars(),
        }
    }
}

impl GeneratorConfig {
    const fn default_birth_year_min() -> i32 {
        1970
    }

    const fn default_birth_year_max() -> i32 {
        2005
    }

    fn default_special_chars() -> String {
        "!@#$%^&*".to_string()
    }
}

/// Remove Vietnamese (and other combining) diacritics: `"Nguyễn"` -> `"Nguyen"`.
///
/// Letters without a decomposition, such as `đ`, are left as they are.
#[must_use]
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lower-case, accent-free, space-free base shared by username and password.
fn base_of(full_name: &str) -> String {
    strip_accents(&full_name.to_lowercase()).replace(' ', "")
}

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// The `(year, month, day)` lying `offset` days after 1 January of `first_year`.
fn date_at_offset(first_year: i32, mut offset: u32) -> (i32, u32, u32) {
    let mut year = first_year;
    while offset >= days_in_year(year) {
        offset -= days_in_year(year);
        year += 1;
    }

    let mut month = 1;
    while offset >= days_in_month(year, month) {
        offset -= days_in_month(year, month);
        month += 1;
    }

    (year, month, offset + 1)
}

/// `base` + two random digits (10..=99).
pub fn username<R: Rng + ?Sized>(rng: &mut R, full_name: &str) -> String {
    format!("{}{}", base_of(full_name), rng.gen_range(10..=99))
}

#[derive(Debug, Clone, Default)]
pub struct CredentialGenerator {
    config: GeneratorConfig,
}

impl CredentialGenerator {
    /// An empty special-character pool is replaced by the default one.
    #[must_use]
    pub fn new(mut config: GeneratorConfig) -> Self {
        if config.special_chars.is_empty() {
            warn!("generator.special_chars is empty, using the default set");
            config.special_chars = GeneratorConfig::default_special_chars();
        }
        Self { config }
    }

    /// `base` + 2 or 3 special characters + three random digits (100..=999).
    pub fn password<R: Rng + ?Sized>(&self, rng: &mut R, full_name: &str) -> String {
        let pool: Vec<char> = self.config.special_chars.chars().collect();
        let count = rng.gen_range(2..=3);

        let mut password = base_of(full_name);
        for _ in 0..count {
            if let Some(c) = pool.choose(rng) {
                password.push(*c);
            }
        }
        password.push_str(&rng.gen_range(100..=999).to_string());
        password
    }

    /// Random `DD/MM/YYYY` date inside the configured year range, uniform
    /// over calendar days.
    pub fn birthday<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let lo = self.config.birth_year_min.min(self.config.birth_year_max);
        let hi = self.config.birth_year_min.max(self.config.birth_year_max);

        let total: u32 = (lo..=hi).map(days_in_year).sum();
        let (year, month, day) = date_at_offset(lo, rng.gen_range(0..total));

        format!("{day:02}/{month:02}/{year}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn strips_vietnamese_diacritics() {
        assert_eq!(strip_accents("Nguyễn Văn Ánh"), "Nguyen Van Anh");
        assert_eq!(strip_accents("Trần Thị Bưởi"), "Tran Thi Buoi");
        assert_eq!(strip_accents("Đỗ"), "Đo");
    }

    #[test]
    fn username_is_base_plus_two_digits() {
        let mut rng = rng();

        for _ in 0..200 {
            let username = username(&mut rng, "Nguyễn Văn A");
            let suffix = username.strip_prefix("nguyenvana").unwrap();
            let n: u32 = suffix.parse().unwrap();
            assert!((10..=99).contains(&n), "{username}");
        }
    }

    #[test]
    fn password_has_specials_and_three_digit_suffix() {
        let generator = CredentialGenerator::default();
        let mut rng = rng();

        for _ in 0..200 {
            let password = generator.password(&mut rng, "Lê Văn C");
            let rest = password.strip_prefix("levanc").unwrap();
            let specials: String = rest.chars().take_while(|c| !c.is_ascii_digit()).collect();
            let digits = &rest[specials.len()..];

            assert!((2..=3).contains(&specials.chars().count()), "{password}");
            assert!(specials.chars().all(|c| "!@#$%^&*".contains(c)));
            let n: u32 = digits.parse().unwrap();
            assert!((100..=999).contains(&n), "{password}");
        }
    }

    #[test]
    fn leap_years_follow_gregorian_rule() {
        assert!(is_leap_year(1972));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2001));
        assert_eq!(days_in_month(2004, 2), 29);
        assert_eq!(days_in_month(2005, 2), 28);
        assert_eq!(days_in_month(1999, 11), 30);
        assert_eq!(days_in_month(1999, 12), 31);
    }

    #[test]
    fn birthdays_are_real_dates_in_range() {
        let generator = CredentialGenerator::default();
        let mut rng = rng();

        for _ in 0..5000 {
            let birthday = generator.birthday(&mut rng);
            let date = NaiveDate::parse_from_str(&birthday, "%d/%m/%Y")
                .unwrap_or_else(|e| panic!("{birthday}: {e}"));
            assert!((1970..=2005).contains(&date.year()), "{birthday}");
            assert_eq!(birthday.len(), 10);
        }
    }

    #[test]
    fn offsets_map_onto_calendar_days() {
        assert_eq!(date_at_offset(1970, 0), (1970, 1, 1));
        assert_eq!(date_at_offset(1970, 31), (1970, 2, 1));
        assert_eq!(date_at_offset(2000, 59), (2000, 2, 29));
        assert_eq!(date_at_offset(2001, 59), (2001, 3, 1));
        assert_eq!(date_at_offset(1999, 365), (2000, 1, 1));

        let total: u32 = (1970..=2005).map(days_in_year).sum();
        assert_eq!(date_at_offset(1970, total - 1), (2005, 12, 31));
    }

    #[test]
    fn single_leap_year_hits_every_day() {
        let generator = CredentialGenerator::new(GeneratorConfig {
            birth_year_min: 2004,
            birth_year_max: 2004,
            ..GeneratorConfig::default()
        });
        let mut rng = rng();

        let seen: std::collections::HashSet<String> =
            (0..20_000).map(|_| generator.birthday(&mut rng)).collect();
        assert_eq!(seen.len(), 366);
        assert!(seen.contains("29/02/2004"));
    }

    #[test]
    fn empty_special_pool_falls_back_to_default() {
        let generator = CredentialGenerator::new(GeneratorConfig {
            special_chars: String::new(),
            ..GeneratorConfig::default()
        });
        let mut rng = rng();

        for _ in 0..50 {
            let password = generator.password(&mut rng, "Hoa");
            let rest = password.strip_prefix("hoa").unwrap();
            let specials = rest.chars().take_while(|c| !c.is_ascii_digit()).count();
            assert!((2..=3).contains(&specials), "{password}");
        }
    }

    #[test]
    fn reversed_year_range_is_tolerated() {
        let generator = CredentialGenerator::new(GeneratorConfig {
            birth_year_min: 2000,
            birth_year_max: 1999,
            ..GeneratorConfig::default()
        });
        let birthday = generator.birthday(&mut rng());
        assert!(birthday.ends_with("/1999") || birthday.ends_with("/2000"));
    }
}
