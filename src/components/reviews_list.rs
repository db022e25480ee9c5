use leptos::*;
use crate::models::review::ReviewWithAuthor;

#[component]
pub fn ReviewsList(reviews: Vec<ReviewWithAuthor>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h3>{ "Reviews" }</h3>
            <ul>
                {
                    reviews.into_iter().map(|entry| {
                        view! {
                            <li class="review">
                                <p class="review-author">{ entry.author_email }</p>
                                <p class="review-stars">{ format!("{} stars", entry.review.stars) }</p>
                                <p class="review-description">{ entry.review.description }</p>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
