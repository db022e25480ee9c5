use leptos::*;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::{cart_item::CartItem, product::Product, review::ReviewWithAuthor};
use crate::reviews::RejectedReview;

/// Product detail view: the product, its reviews, the cart and the review form.
/// `rejected` is set when the page is shown again after a failed submission.
#[component]
pub fn ProductPage(
    product: Product,
    reviews: Vec<ReviewWithAuthor>,
    cart_items: Vec<CartItem>,
    rejected: Option<RejectedReview>,
) -> impl IntoView {
    let product_id = product.id;
    let (description, stars, errors) = match rejected {
        Some(rejected) => (
            rejected.candidate.description.unwrap_or_default(),
            rejected.candidate.stars,
            rejected.errors.full_messages(),
        ),
        None => (String::new(), None, Vec::new()),
    };
    let cart_quantity: i64 = cart_items.iter().map(|item| item.quantity).sum();

    view! {
        <main class="product">
            <h1>{ product.name }</h1>
            <p class="product-description">{ product.description }</p>
            <p class="cart-summary">{ format!("Cart: {} item(s)", cart_quantity) }</p>
            <ReviewsList reviews=reviews />
            <ReviewForm product_id=product_id description=description stars=stars errors=errors />
        </main>
    }
}
