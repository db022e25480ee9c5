// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored review. Every field is present once a row exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,        // ID of the user who submitted the review
    pub product_id: i64,     // ID of the product the review is about
    pub description: String, // Content of the review
    pub stars: i64,          // Rating, presence checked only
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review together with the email of its author, as listed on a product page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author_email: String,
}

/// The fields a caller may submit for a review.
///
/// Only `review[description]` and `review[stars]` are read from the form body.
/// Every other key, including a forged `review[user_id]`, is dropped during
/// deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewParams {
    #[serde(rename = "review[description]", default)]
    pub description: Option<String>,
    #[serde(rename = "review[stars]", default)]
    pub stars: Option<String>,
}

/// Identifiers that come from the server side of the request: the session
/// user and the product named in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewContext {
    pub user_id: Option<i64>,
    pub product_id: i64,
}

impl ReviewContext {
    pub fn new(user_id: Option<i64>, product_id: i64) -> Self {
        Self {
            user_id,
            product_id,
        }
    }

    /// Builds a candidate from the trusted identifiers and the allow-listed
    /// caller fields.
    pub fn merge(self, params: ReviewParams) -> ReviewCandidate {
        ReviewCandidate {
            user_id: self.user_id,
            product_id: Some(self.product_id),
            description: params.description,
            stars: params.stars.as_deref().and_then(parse_stars),
        }
    }
}

// An empty select or a value that is not an integer counts as no rating.
fn parse_stars(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// A review that has been assembled but not yet validated or stored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewCandidate {
    pub user_id: Option<i64>,
    pub product_id: Option<i64>,
    pub description: Option<String>,
    pub stars: Option<i64>,
}

impl ReviewCandidate {
    /// Checks that user, product, description and stars are all present.
    /// A description made only of whitespace counts as blank.
    pub fn validate(&self) -> Result<ValidReview, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.user_id.is_none() {
            errors.add_blank(ReviewField::User);
        }
        if self.product_id.is_none() {
            errors.add_blank(ReviewField::Product);
        }
        let description = self
            .description
            .as_deref()
            .filter(|description| !description.trim().is_empty());
        if description.is_none() {
            errors.add_blank(ReviewField::Description);
        }
        if self.stars.is_none() {
            errors.add_blank(ReviewField::Stars);
        }

        match (self.user_id, self.product_id, description, self.stars) {
            (Some(user_id), Some(product_id), Some(description), Some(stars)) => Ok(ValidReview {
                user_id,
                product_id,
                description: description.to_string(),
                stars,
            }),
            _ => Err(errors),
        }
    }
}

/// A candidate that passed presence validation. This is the only shape the
/// store accepts for inserts.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReview {
    pub user_id: i64,
    pub product_id: i64,
    pub description: String,
    pub stars: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    User,
    Product,
    Description,
    Stars,
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewField::User => "User",
            ReviewField::Product => "Product",
            ReviewField::Description => "Description",
            ReviewField::Stars => "Stars",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ReviewField,
    pub message: String,
}

/// Field-level problems found while validating a candidate, in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn add_blank(&mut self, field: ReviewField) {
        self.errors.push(FieldError {
            field,
            message: "can't be blank".to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: ReviewField) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Messages prefixed with the field name, e.g. "Stars can't be blank".
    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| format!("{} {}", error.field, error.message))
            .collect()
    }
}
