//! Session gate middleware for page routes.
//!
//! Runs in front of every admin panel page. Decides per request whether to
//! serve the page, send the visitor to the entry route, or bounce an
//! already-authenticated visitor off a public route. A valid token whose
//! session has been terminated elsewhere (logout in another tab) is treated
//! like an invalid one: the cookie is cleared and the visitor lands on the
//! entry route.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use pressgate_auth::GateOutcome;

use crate::state::AppState;

pub async fn session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let pathname = request.uri().path().to_string();
    let token = jar
        .get(&state.config.session.cookie_name)
        .map(|c| c.value().to_string());

    let resolution = state.session_gate.resolve(&pathname, token.as_deref());

    // A token that validates but is no longer registered means the session
    // was ended from elsewhere.
    let outcome = match (&resolution.outcome, &resolution.claims) {
        (GateOutcome::Allow | GateOutcome::RedirectToLanding, Some(claims))
            if !state.session_registry.contains(&claims.jti) =>
        {
            tracing::debug!(jti = %claims.jti, "Terminated session presented a valid token");
            GateOutcome::RedirectToEntry { clear_token: true }
        }
        _ => resolution.outcome,
    };

    match outcome {
        GateOutcome::Allow => next.run(request).await,
        GateOutcome::RedirectToLanding => {
            Redirect::to(state.session_gate.landing_route()).into_response()
        }
        GateOutcome::RedirectToEntry { clear_token } => {
            let redirect = Redirect::to(state.session_gate.entry_route());
            if clear_token {
                let jar = jar.remove(clear_cookie(&state));
                (jar, redirect).into_response()
            } else {
                redirect.into_response()
            }
        }
    }
}

/// An expired copy of the session cookie, used to clear it client-side.
fn clear_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.config.session.cookie_name.clone(), ""))
        .path(state.config.session.cookie_path.clone())
        .build()
}
