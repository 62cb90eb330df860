pub mod a001_dish;
pub mod a002_basket;
pub mod a003_order;
