/*
[INPUT]:  Backend JSON records (profile, balance, payment card)
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - records mirrored from the backend
[UPDATE]: When the backend schema changes or new records are added
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "serde_helpers::decimal_text")]
    pub balance: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub verification_level: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub full_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub has_active_rentals: bool,
}

impl UserProfile {
    /// Full name when the backend provides one, otherwise the phone number
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.phone_number
        } else {
            &self.full_name
        }
    }

    pub fn balance_amount(&self) -> Decimal {
        lenient_decimal(&self.balance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(deserialize_with = "serde_helpers::decimal_text")]
    pub balance: String,
}

impl Balance {
    /// Balance as a number; unparseable text reads as zero
    pub fn amount(&self) -> Decimal {
        lenient_decimal(&self.balance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCard {
    pub id: i64,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub masked_number: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub card_type: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub bank_name: String,
    #[serde(default, deserialize_with = "serde_helpers::decimal_text")]
    pub expiry_month: String,
    #[serde(default, deserialize_with = "serde_helpers::decimal_text")]
    pub expiry_year: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_expired: bool,
}

impl PaymentCard {
    /// `MM/YY`
    pub fn expiry(&self) -> String {
        let month = self.expiry_month.trim();
        let year = self.expiry_year.trim();
        let year = match year.char_indices().rev().nth(1) {
            Some((idx, _)) => &year[idx..],
            None => year,
        };
        format!("{month:0>2}/{year:0>2}")
    }
}

/// Parse display numbers without ever failing
pub fn lenient_decimal(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim())
        .or_else(|_| Decimal::from_scientific(raw.trim()))
        .unwrap_or(Decimal::ZERO)
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(value.unwrap_or_default())
    }

    /// Numbers and strings both land as text; null becomes empty
    pub fn decimal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(raw) => Ok(raw),
            Value::Number(number) => Ok(number.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected a number or string, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserialization() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 42,
            "first_name": "Aibek",
            "last_name": "Toktogulov",
            "middle_name": null,
            "email": "aibek@example.com",
            "phone_number": "+996700000000",
            "birth_date": "1990-05-01",
            "balance": "1500.50",
            "is_verified": true,
            "verification_level": "basic",
            "full_name": "Aibek Toktogulov",
            "age": 35,
            "has_active_rentals": false
        }))
        .unwrap();

        assert_eq!(profile.id, 42);
        assert_eq!(profile.middle_name, None);
        assert_eq!(profile.balance_amount(), Decimal::new(150050, 2));
        assert_eq!(profile.display_name(), "Aibek Toktogulov");
    }

    #[test]
    fn test_sparse_profile_uses_phone_as_name() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 7,
            "phone_number": "+996700000000",
            "full_name": null,
            "balance": 12
        }))
        .unwrap();

        assert_eq!(profile.display_name(), "+996700000000");
        assert_eq!(profile.balance, "12");
        assert_eq!(profile.balance_amount(), Decimal::from(12));
    }

    #[test]
    fn test_profile_requires_id() {
        assert!(serde_json::from_value::<UserProfile>(json!({"first_name": "x"})).is_err());
    }

    #[test]
    fn test_balance_tolerates_bad_numbers() {
        for raw in ["", "abc", "1,000", "NaN"] {
            let balance = Balance { balance: raw.to_string() };
            assert_eq!(balance.amount(), Decimal::ZERO, "input {raw:?}");
        }
        let balance: Balance = serde_json::from_value(json!({"balance": 99.5})).unwrap();
        assert_eq!(balance.amount(), Decimal::new(995, 1));
    }

    #[test]
    fn test_card_expiry() {
        let card: PaymentCard = serde_json::from_value(json!({
            "id": 3,
            "masked_number": "4400 **** **** 1234",
            "card_type": "visa",
            "bank_name": "Demir",
            "expiry_month": 7,
            "expiry_year": "2027",
            "is_default": true,
            "is_active": true,
            "is_expired": false
        }))
        .unwrap();

        assert_eq!(card.expiry(), "07/27");
        assert!(card.is_default);
    }
}
