//! Value objects validated before `POST /order`.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_api_datetime, DomainError};

/// First hour a delivery may be scheduled at
pub const BUSINESS_OPEN_HOUR: u32 = 9;
/// Deliveries must be scheduled before this hour
pub const BUSINESS_CLOSE_HOUR: u32 = 22;
pub const ADDRESS_MIN_LENGTH: usize = 10;
pub const ADDRESS_MAX_LENGTH: usize = 200;

/// Requested delivery time: in the future and within business hours.
/// Keeps the value as entered, which is what the API receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTime(String);

impl DeliveryTime {
    pub fn parse(value: &str, now: NaiveDateTime) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid_argument("Delivery time is required"));
        }

        let at = parse_api_datetime(value).ok_or_else(|| {
            DomainError::invalid_argument(
                "Invalid delivery time format. Use ISO 8601 format (YYYY-MM-DDTHH:MM)",
            )
        })?;

        if at <= now {
            return Err(DomainError::invalid_argument(
                "Delivery time must be in the future",
            ));
        }

        let hour = at.hour();
        if !(BUSINESS_OPEN_HOUR..BUSINESS_CLOSE_HOUR).contains(&hour) {
            return Err(DomainError::invalid_argument(format!(
                "Delivery time must be between {}:00 and {}:00",
                BUSINESS_OPEN_HOUR, BUSINESS_CLOSE_HOUR
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Delivery address: house number, then street name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid_argument("Address is required"));
        }

        let length = value.chars().count();
        if length < ADDRESS_MIN_LENGTH {
            return Err(DomainError::invalid_argument(format!(
                "Address must be at least {} characters long",
                ADDRESS_MIN_LENGTH
            )));
        }
        if length > ADDRESS_MAX_LENGTH {
            return Err(DomainError::invalid_argument(format!(
                "Address must be less than {} characters",
                ADDRESS_MAX_LENGTH
            )));
        }

        if !starts_with_house_number(value) {
            return Err(DomainError::invalid_argument(
                "Address should start with a number followed by street name",
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Digits, whitespace, then an ASCII letter
fn starts_with_house_number(value: &str) -> bool {
    let rest = value.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == value.len() {
        return false;
    }
    let street = rest.trim_start_matches(char::is_whitespace);
    if street.len() == rest.len() {
        return false;
    }
    street
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic())
        .unwrap_or(false)
}

/// Body of `POST /order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub delivery_time: String,
    pub address: String,
}

impl OrderCreate {
    pub fn new(delivery_time: &DeliveryTime, address: &Address) -> Self {
        Self {
            delivery_time: delivery_time.as_str().to_string(),
            address: address.as_str().to_string(),
        }
    }

    /// Validate raw form input into a request body
    pub fn from_form(
        delivery_time: &str,
        address: &str,
        now: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let delivery_time = DeliveryTime::parse(delivery_time, now)?;
        let address = Address::parse(address)?;
        Ok(Self::new(&delivery_time, &address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn message(err: DomainError) -> String {
        match err {
            DomainError::InvalidArgument(message) => message,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_delivery_time_rules() {
        let ok = DeliveryTime::parse("2024-03-15T18:30", now()).unwrap();
        assert_eq!(ok.as_str(), "2024-03-15T18:30");

        assert_eq!(
            message(DeliveryTime::parse("", now()).unwrap_err()),
            "Delivery time is required"
        );
        assert!(message(DeliveryTime::parse("soon", now()).unwrap_err()).starts_with("Invalid"));
        assert_eq!(
            message(DeliveryTime::parse("2024-03-15T11:00", now()).unwrap_err()),
            "Delivery time must be in the future"
        );
        assert!(DeliveryTime::parse("2024-03-15T22:00", now()).is_err());
        assert!(DeliveryTime::parse("2024-03-16T08:59", now()).is_err());
        assert!(DeliveryTime::parse("2024-03-16T09:00", now()).is_ok());
        assert!(DeliveryTime::parse("2024-03-15T21:59", now()).is_ok());
    }

    #[test]
    fn test_address_rules() {
        assert_eq!(
            Address::parse("  12 Lenina street  ").unwrap().as_str(),
            "12 Lenina street"
        );
        assert_eq!(message(Address::parse("   ").unwrap_err()), "Address is required");
        assert!(message(Address::parse("1 Main").unwrap_err()).contains("at least"));
        assert!(Address::parse(&format!("1 {}", "a".repeat(200))).is_err());
        assert!(Address::parse("Lenina street 12").is_err());
        assert!(Address::parse("12Lenina street").is_err());
        assert!(Address::parse("12   Lenina street").is_ok());
    }

    #[test]
    fn test_order_create_from_form() {
        let body = OrderCreate::from_form("2024-03-15T18:30", "12 Lenina street", now()).unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["deliveryTime"], "2024-03-15T18:30");
        assert_eq!(json["address"], "12 Lenina street");

        assert!(OrderCreate::from_form("2024-03-15T18:30", "short", now()).is_err());
    }
}
