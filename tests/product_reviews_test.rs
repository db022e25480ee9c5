use actix_web::http::{header, StatusCode};
use actix_web::test;
use bookstore_reviews::config::InvalidReviewPolicy;

#[macro_use]
mod support;
use support::{body_text, review_request, seeded_shop};

#[actix_web::test]
async fn test_users_can_leave_reviews() {
    let shop = seeded_shop().await;
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let request = review_request(
        shop.product.id,
        Some(shop.reader.id),
        &[("review[description]", "Soooooo great"), ("review[stars]", "4")],
    );
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, format!("/products/{}", shop.product.id));

    let page = test::call_service(&app, test::TestRequest::get().uri(&location).to_request()).await;
    assert_eq!(page.status(), StatusCode::OK);
    let body = body_text(page).await;
    assert!(body.contains("admin@example.com"));
    assert!(body.contains("4 stars"));
    assert!(body.contains("Soooooo great"));
    assert_eq!(shop.db.count_reviews_for_product(shop.product.id).await.unwrap(), 1);
}

#[actix_web::test]
async fn test_user_sees_validation_errors_for_reviews() {
    let shop = seeded_shop().await;
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let request = review_request(
        shop.product.id,
        Some(shop.reader.id),
        &[("review[description]", ""), ("review[stars]", "")],
    );
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Oh no! Your review was not shared with the world yet"));
    assert!(body.contains("Description can"));
    assert!(body.contains("Stars can"));
    assert!(body.contains("Test Book"));
    assert_eq!(shop.db.count_reviews_for_product(shop.product.id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_rejected_review_keeps_submitted_text_and_reloads_cart() {
    let shop = seeded_shop().await;
    shop.db.insert_cart_item(shop.product.id, 2).await.unwrap();
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let request = review_request(
        shop.product.id,
        Some(shop.reader.id),
        &[("review[description]", "Loved the chapter on kilns")],
    );
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("Loved the chapter on kilns"));
    assert!(body.contains("Cart: 2 item(s)"));
    assert_eq!(shop.db.count_reviews_for_product(shop.product.id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_forged_identifiers_in_payload_are_ignored() {
    let shop = seeded_shop().await;
    let intruder = shop.db.insert_user("intruder@example.com", false).await.unwrap();
    let other_product = shop.db.insert_product("Other Book", "").await.unwrap();
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let forged_user = intruder.id.to_string();
    let forged_product = other_product.id.to_string();
    let request = review_request(
        shop.product.id,
        Some(shop.reader.id),
        &[
            ("review[description]", "Honest opinion"),
            ("review[stars]", "5"),
            ("review[user_id]", forged_user.as_str()),
            ("review[product_id]", forged_product.as_str()),
            ("user_id", forged_user.as_str()),
        ],
    );
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let reviews = shop.db.get_reviews_for_product(shop.product.id).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].review.user_id, shop.reader.id);
    assert_eq!(reviews[0].author_email, "admin@example.com");
    assert_eq!(shop.db.count_reviews_for_product(other_product.id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_anonymous_review_is_not_shared() {
    let shop = seeded_shop().await;
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let request = review_request(
        shop.product.id,
        None,
        &[("review[description]", "Soooooo great"), ("review[stars]", "4")],
    );
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("User can"));
    assert_eq!(shop.db.count_reviews_for_product(shop.product.id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_unknown_product_is_not_found() {
    let shop = seeded_shop().await;
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let page = test::call_service(&app, test::TestRequest::get().uri("/products/999").to_request()).await;
    assert_eq!(page.status(), StatusCode::NOT_FOUND);

    let request = review_request(
        999,
        Some(shop.reader.id),
        &[("review[description]", "Ghost"), ("review[stars]", "3")],
    );
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(shop.db.count_reviews_for_product(999).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_product_page_shows_review_form() {
    let shop = seeded_shop().await;
    let app = review_app!(shop.db, InvalidReviewPolicy::Rerender);

    let uri = format!("/products/{}", shop.product.id);
    let page = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(page.status(), StatusCode::OK);
    let body = body_text(page).await;
    assert!(body.contains("Test Book"));
    assert!(body.contains("what did you think?"));
    assert!(body.contains("review[stars]"));
    assert!(body.contains("Submit Review"));
    assert!(!body.contains("Oh no! Your review was not shared with the world yet"));
}
