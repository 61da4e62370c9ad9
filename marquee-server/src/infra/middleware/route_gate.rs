//! Route gate middleware.
//!
//! Runs before any handler. Paths matched by the exclusion pattern pass
//! straight through; everything else is classified and either allowed or
//! answered with a temporary redirect to the login or home path.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use marquee_core::{CookieSession, GateDecision, SessionProvider};
use tracing::debug;

use crate::infra::app_state::AppState;

/// Session flag read lazily from the request's `Cookie` headers.
#[derive(Debug)]
pub struct RequestCookieSession<'a> {
    headers: &'a HeaderMap,
    cookie_name: &'a str,
}

impl<'a> RequestCookieSession<'a> {
    pub fn new(headers: &'a HeaderMap, cookie_name: &'a str) -> Self {
        Self {
            headers,
            cookie_name,
        }
    }
}

impl SessionProvider for RequestCookieSession<'_> {
    fn is_authenticated(&self) -> bool {
        // Header values that are not valid UTF-8 are ignored, which leaves
        // the visitor logged out.
        let cookies = self
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok());
        CookieSession::from_cookie_headers(cookies, self.cookie_name)
            .is_authenticated()
    }
}

pub async fn route_gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let gate = state.gate();
    let path = request.uri().path();

    if !gate.applies_to(path) {
        return next.run(request).await;
    }

    let session = RequestCookieSession::new(
        request.headers(),
        &state.config().gate.session_cookie,
    );
    let decision = gate.evaluate(path, &session);

    match gate.redirect_target(decision) {
        Some(target) => {
            debug!(path, target, decision = decision.as_str(), "redirecting");
            Redirect::temporary(target).into_response()
        }
        None => {
            debug_assert_eq!(decision, GateDecision::Allow);
            next.run(request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_flag_from_any_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("isLogged=true"));

        assert!(RequestCookieSession::new(&headers, "isLogged").is_authenticated());
        assert!(!RequestCookieSession::new(&headers, "session").is_authenticated());
    }

    #[test]
    fn unreadable_cookie_is_logged_out() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_bytes(b"isLogged=\xfftrue").expect("opaque bytes"),
        );

        assert!(!RequestCookieSession::new(&headers, "isLogged").is_authenticated());
    }
}
