use actix_web::{http::header, http::StatusCode, web, HttpResponse};
use leptos::logging::{log, warn};
use crate::app::render_product_page;
use crate::config::InvalidReviewPolicy;
use crate::db::Database;
use crate::error::AppError;
use crate::models::product::Product;
use crate::models::review::{ReviewContext, ReviewParams};
use crate::reviews::{submit_review, Submission};
use crate::session::Session;

fn product_path(product_id: i64) -> String {
    format!("/products/{}", product_id)
}

fn redirect_to_product(product_id: i64) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, product_path(product_id)))
        .finish()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn find_product(db: &Database, product_id: i64) -> Result<Product, AppError> {
    db.get_product(product_id)
        .await?
        .ok_or(AppError::ProductNotFound(product_id))
}

// GET /products/{product_id}
pub async fn show_product(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = find_product(&db, product_id).await?;
    let reviews = db.get_reviews_for_product(product_id).await?;
    let cart_items = db.get_cart_items().await?;
    Ok(html(
        StatusCode::OK,
        render_product_page(product, reviews, cart_items, None),
    ))
}

// POST /products/{product_id}/reviews
//
// The user comes from the session and the product from the path; the form
// body only contributes description and stars.
pub async fn create_review(
    db: web::Data<Database>,
    policy: web::Data<InvalidReviewPolicy>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ReviewParams>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = find_product(&db, product_id).await?;
    let context = ReviewContext::new(session.user_id, product_id);

    match submit_review(&db, context, form.into_inner()).await? {
        Submission::Stored(review) => {
            log!("[API] Review {} shared for product {}", review.id, product_id);
            Ok(redirect_to_product(product_id))
        }
        Submission::Rejected(rejected) => match *policy.get_ref() {
            InvalidReviewPolicy::Discard => {
                warn!(
                    "[API] Discarding invalid review for product {}: {}",
                    product_id,
                    rejected.errors.full_messages().join(", ")
                );
                Ok(redirect_to_product(product_id))
            }
            InvalidReviewPolicy::Rerender => {
                let reviews = db.get_reviews_for_product(product_id).await?;
                let cart_items = db.get_cart_items().await?;
                Ok(html(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    render_product_page(product, reviews, cart_items, Some(rejected)),
                ))
            }
        },
    }
}
