use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Placeholder stored when a phone or account number was not found in the input.
pub const MISSING_FIELD: &str = "Chưa có";

/// A generated credential entry. Field names are the on-disk JSON keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub username: String,
    pub password: String,
    pub phone: String,
    pub account_number: String,
    pub full_name: String,
    /// `DD/MM/YYYY`
    pub birthday: String,
    #[serde(with = "created_at_format")]
    pub created_at: NaiveDateTime,
}

impl Record {
    /// The single-line export form: `username|password|phone|account_number|full_name|birthday`.
    #[must_use]
    pub fn pipe_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.username,
            self.password,
            self.phone,
            self.account_number,
            self.full_name,
            self.birthday
        )
    }
}

mod created_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Record {
        Record {
            username: "nguyenvana42".to_string(),
            password: "nguyenvana!@#512".to_string(),
            phone: "0123456789".to_string(),
            account_number: MISSING_FIELD.to_string(),
            full_name: "Nguyễn Văn A".to_string(),
            birthday: "07/03/1988".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 30, 0))
                .unwrap(),
        }
    }

    #[test]
    fn pipe_line_joins_fields_in_order() {
        assert_eq!(
            sample().pipe_line(),
            "nguyenvana42|nguyenvana!@#512|0123456789|Chưa có|Nguyễn Văn A|07/03/1988"
        );
    }

    #[test]
    fn created_at_uses_plain_local_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["created_at"], "2024-05-01 09:30:00");
        assert_eq!(json["full_name"], "Nguyễn Văn A");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
