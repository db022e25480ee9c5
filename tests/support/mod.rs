#![allow(dead_code)]

use actix_web::test::TestRequest;
use bookstore_reviews::db::Database;
use bookstore_reviews::models::{product::Product, user::User};
use bookstore_reviews::session::AUTHORIZED_USER_HEADER;

// Builds an initialised actix test service around `db` with the given invalid-review policy
macro_rules! review_app {
    ($db:expr, $policy:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new($policy))
                .configure(bookstore_reviews::app::configure),
        )
        .await
    };
}

pub struct Shop {
    pub db: Database,
    pub reader: User,
    pub product: Product,
}

// In-memory store with one non-admin reader and one product
pub async fn seeded_shop() -> Shop {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    let reader = db.insert_user("admin@example.com", false).await.unwrap();
    let product = db
        .insert_product("Test Book", "This is a description")
        .await
        .unwrap();
    Shop { db, reader, product }
}

pub fn review_request(product_id: i64, user_id: Option<i64>, fields: &[(&str, &str)]) -> TestRequest {
    let mut request = TestRequest::post()
        .uri(&format!("/products/{}/reviews", product_id))
        .set_form(fields);
    if let Some(id) = user_id {
        request = request.insert_header((AUTHORIZED_USER_HEADER, format!("{{\"id\": {}}}", id)));
    }
    request
}

pub async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
    let bytes = actix_web::test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}
