//! Anonymous customer sessions carried in a cookie.

use std::sync::Arc;

use gearlock_app::domain::sessions::SessionUuid;
use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use tracing::debug;

use crate::{extensions::*, state::State};

/// Resolve the session cookie, minting a new session when it is missing or malformed.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let cookie = match depot.obtain::<Arc<State>>() {
        Ok(state) => state.session_cookie.clone(),
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let existing = req
        .cookie(&cookie.name)
        .and_then(|value| value.value().parse::<SessionUuid>().ok());

    let session = match existing {
        Some(session) => session,
        None => {
            let session = SessionUuid::new();

            debug!(%session, "session started");

            res.add_cookie(
                Cookie::build((cookie.name, session.to_string()))
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .path("/")
                    .secure(cookie.secure)
                    .build(),
            );

            session
        }
    };

    depot.insert_session_uuid(session);

    ctrl.call_next(req, depot, res).await;
}
