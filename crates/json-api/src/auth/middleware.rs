//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use showroom_app::auth::AuthServiceError;
use tracing::{debug, error};

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let session = match state.app.auth.authenticate_bearer(token).await {
        Ok(session) => session,
        Err(AuthServiceError::Unauthenticated | AuthServiceError::Forbidden) => {
            res.render(StatusError::unauthorized().brief("Invalid session token"));

            return;
        }
        Err(AuthServiceError::Http(source)) => {
            error!("failed to reach identity provider: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
        Err(AuthServiceError::UnexpectedResponse(detail)) => {
            error!("identity provider returned an unexpected response: {detail}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    debug!(user = %session.user_id, role = ?session.role, "session verified");

    depot.insert_session(session);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
