use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::OrderStatus;
use crate::domain::a002_basket::aggregate::BasketItem;
use crate::domain::common::{parse_api_datetime, DomainError};

/// Row of `GET /order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub id: Uuid,
    pub delivery_time: String,
    pub order_time: String,
    pub status: OrderStatus,
    pub price: f64,
}

impl OrderInfo {
    /// Apply the customer's delivery confirmation
    pub fn confirm(&mut self) -> Result<(), DomainError> {
        self.status = self.status.confirm()?;
        Ok(())
    }
}

/// Full order of `GET /order/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub delivery_time: String,
    pub order_time: String,
    pub status: OrderStatus,
    pub price: f64,
    #[serde(default)]
    pub dishes: Vec<BasketItem>,
    #[serde(default)]
    pub address: String,
}

/// Delivery progress derived from the status and the promised time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    Overdue,
    OnTime,
}

impl DeliveryStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Overdue => "Overdue",
            DeliveryStatus::OnTime => "On Time",
        }
    }
}

impl Order {
    /// Total number of portions
    pub fn item_count(&self) -> u32 {
        self.dishes.iter().map(|dish| dish.amount).sum()
    }

    pub fn unique_item_count(&self) -> usize {
        self.dishes.len()
    }

    pub fn can_be_confirmed(&self) -> bool {
        self.status.can_be_confirmed()
    }

    pub fn confirm(&mut self) -> Result<(), DomainError> {
        self.status = self.status.confirm()?;
        Ok(())
    }

    pub fn delivery_time_parsed(&self) -> Option<NaiveDateTime> {
        parse_api_datetime(&self.delivery_time)
    }

    pub fn delivery_status(&self, now: NaiveDateTime) -> DeliveryStatus {
        if self.status.is_delivered() {
            return DeliveryStatus::Delivered;
        }
        match self.delivery_time_parsed() {
            Some(expected) if expected < now => DeliveryStatus::Overdue,
            _ => DeliveryStatus::OnTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const ORDER_JSON: &str = r#"{
        "id": "0c1b3a52-6a1d-4c4e-9b8e-2f7a5d6c9e01",
        "deliveryTime": "2024-03-15T18:30:00",
        "orderTime": "2024-03-15T17:02:26.123",
        "status": "InProcess",
        "price": 990,
        "dishes": [
            {"id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "name": "Tom Yum",
             "price": 330, "totalPrice": 660, "amount": 2, "image": ""},
            {"id": "6e1b6c1a-9f3d-4a8e-8c43-5c1a9b7d2e10", "name": "Cola",
             "price": 330, "totalPrice": 330, "amount": 1, "image": ""}
        ],
        "address": "12 Lenina street"
    }"#;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_order_from_api_json() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.status, OrderStatus::InProcess);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.unique_item_count(), 2);
        assert!(order.can_be_confirmed());
    }

    #[test]
    fn test_unknown_status_fails_to_decode() {
        let json = ORDER_JSON.replace("InProcess", "Bogus");
        assert!(serde_json::from_str::<Order>(&json).is_err());
    }

    #[test]
    fn test_delivery_status() {
        let mut order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.delivery_status(at(17)), DeliveryStatus::OnTime);
        assert_eq!(order.delivery_status(at(19)), DeliveryStatus::Overdue);

        order.confirm().unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.delivery_status(at(19)), DeliveryStatus::Delivered);
        assert!(order.confirm().is_err());
    }

    #[test]
    fn test_order_info_confirm() {
        let json = r#"[{
            "id": "0c1b3a52-6a1d-4c4e-9b8e-2f7a5d6c9e01",
            "deliveryTime": "2024-03-15T18:30:00",
            "orderTime": "2024-03-15T17:02:26",
            "status": "Delivered",
            "price": 990
        }]"#;
        let mut orders: Vec<OrderInfo> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            orders[0].confirm(),
            Err(DomainError::InvalidTransition { .. })
        ));
    }
}
