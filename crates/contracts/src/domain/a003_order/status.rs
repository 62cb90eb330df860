use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::DomainError;

/// Lifecycle status of an order.
///
/// The only client-side transition is `InProcess --confirm--> Delivered`.
/// `Cancelled` is recognised when the server reports it, nothing here moves
/// an order into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProcess,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProcess => "InProcess",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProcess => "In Process",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Colour tag used by the status badge
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "orange",
            OrderStatus::InProcess => "blue",
            OrderStatus::Delivered => "green",
            OrderStatus::Cancelled => "red",
        }
    }

    pub fn can_be_confirmed(&self) -> bool {
        matches!(self, OrderStatus::InProcess)
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Status after the customer confirms delivery
    pub fn confirm(self) -> Result<OrderStatus, DomainError> {
        if !self.can_be_confirmed() {
            return Err(DomainError::InvalidTransition {
                from: self.code().to_string(),
                action: "confirm",
            });
        }
        Ok(OrderStatus::Delivered)
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "InProcess" => Ok(OrderStatus::InProcess),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::invalid_argument(format!(
                "invalid order status: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_in_process_can_be_confirmed() {
        assert!("InProcess".parse::<OrderStatus>().unwrap().can_be_confirmed());
        assert!(!"Delivered".parse::<OrderStatus>().unwrap().can_be_confirmed());
        assert!(!OrderStatus::Pending.can_be_confirmed());
        assert!(!OrderStatus::Cancelled.can_be_confirmed());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(matches!(
            "Bogus".parse::<OrderStatus>(),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!("inprocess".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_confirm_transition() {
        assert_eq!(OrderStatus::InProcess.confirm(), Ok(OrderStatus::Delivered));
        assert_eq!(
            OrderStatus::Delivered.confirm(),
            Err(DomainError::InvalidTransition {
                from: "Delivered".to_string(),
                action: "confirm",
            })
        );
        assert!(OrderStatus::Pending.confirm().is_err());
        assert!(OrderStatus::Cancelled.confirm().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(OrderStatus::InProcess.display_name(), "In Process");
        assert_eq!(OrderStatus::InProcess.to_string(), "InProcess");
    }
}
