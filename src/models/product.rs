// src/models/product.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,             // Unique ID for the product
    pub name: String,        // Title shown on the detail page
    pub description: String, // Short blurb shown under the title
}
