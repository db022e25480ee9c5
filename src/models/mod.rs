pub mod cart_item;
pub mod product;
pub mod review;
pub mod user;
