use leptos::*;

/// The review form on a product page.
///
/// Posts `review[description]` and `review[stars]` to the product's review
/// endpoint. When `errors` is non-empty the form is being shown again after a
/// rejected submission, so the messages are listed and the submitted values
/// are filled back in.
#[component]
pub fn ReviewForm(
    product_id: i64,
    description: String,
    stars: Option<i64>,
    errors: Vec<String>,
) -> impl IntoView {
    let action = format!("/products/{}/reviews", product_id);
    let error_summary = (!errors.is_empty()).then(|| {
        view! {
            <div class="review-errors">
                <h3>{ "Oh no! Your review was not shared with the world yet" }</h3>
                <ul>
                    {
                        errors.into_iter().map(|message| {
                            view! { <li>{ message }</li> }
                        }).collect::<Vec<_>>()
                    }
                </ul>
            </div>
        }
    });
    let star_options = (1..=5i64)
        .map(|count| {
            view! {
                <option value={count.to_string()} selected={stars == Some(count)}>
                    { count.to_string() }
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="review-form" method="post" action=action>
            <h3>{ "Submit Review" }</h3>
            { error_summary }
            <label for="review_description">{ "what did you think?" }</label>
            <textarea id="review_description" name="review[description]">{ description }</textarea>
            <label for="review_stars">{ "Stars" }</label>
            <select id="review_stars" name="review[stars]">
                <option value="">{ "" }</option>
                { star_options }
            </select>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
