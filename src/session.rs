//! Trusted request context.
//!
//! Authentication happens upstream of this service. The gateway forwards the
//! signed-in user as a JSON header (`Authorized-User: {"id": 12}`); requests
//! without it are anonymous. Handlers read the user only through [`Session`],
//! never from the request body.
use actix_web::{dev::Payload, http::header::HeaderMap, FromRequest, HttpRequest};
use leptos::logging::warn;
use serde::Deserialize;
use std::future::{ready, Ready};

pub const AUTHORIZED_USER_HEADER: &str = "Authorized-User";

#[derive(Deserialize, Debug)]
struct AuthorizedUserHeader {
    id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(AUTHORIZED_USER_HEADER) else {
            return Session::default();
        };
        let parsed = value
            .to_str()
            .ok()
            .and_then(|raw| serde_json::from_str::<AuthorizedUserHeader>(raw).ok());
        match parsed {
            Some(header) => Session {
                user_id: Some(header.id),
            },
            None => {
                warn!("[SESSION] Ignoring malformed {} header", AUTHORIZED_USER_HEADER);
                Session::default()
            }
        }
    }
}

// Never fails: a missing or broken header is an anonymous session.
impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Session::from_headers(req.headers())))
    }
}
