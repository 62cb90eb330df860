//! Wire contracts of the food-delivery API and the client-side domain rules
//! shared by the storefront.

pub mod domain;
pub mod system;
