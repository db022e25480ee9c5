// src/models/cart_item.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub product_id: i64, // Product the line refers to
    pub quantity: i64,
}
