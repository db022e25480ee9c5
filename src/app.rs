//! Server-side page rendering and route table.
//! Pages are Leptos components rendered to HTML strings inside a small document shell.
use actix_web::web;
use leptos::*;
use crate::api::{create_review, show_product};
use crate::components::product_page::ProductPage;
use crate::models::{cart_item::CartItem, product::Product, review::ReviewWithAuthor};
use crate::reviews::RejectedReview;

pub fn render_product_page(
    product: Product,
    reviews: Vec<ReviewWithAuthor>,
    cart_items: Vec<CartItem>,
    rejected: Option<RejectedReview>,
) -> String {
    let body = leptos::ssr::render_to_string(move || {
        view! {
            <ProductPage product=product reviews=reviews cart_items=cart_items rejected=rejected />
        }
    });
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/><title>Bookstore</title></head><body>{}</body></html>",
        body
    )
}

// Registers the product and review routes on an actix `App`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("/{product_id}", web::get().to(show_product))
            .route("/{product_id}/reviews", web::post().to(create_review)),
    );
}
