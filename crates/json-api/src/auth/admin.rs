//! Admin guard.

use salvo::prelude::*;
use tracing::warn;

use crate::extensions::*;

/// Stops the request unless the verified session carries the admin role.
///
/// Must run after [`super::middleware::handler`].
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let session = match depot.session_or_401() {
        Ok(session) => session,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    if session.require_admin().is_err() {
        warn!(user = %session.user_id, path = %req.uri().path(), "admin route refused");

        res.render(StatusError::forbidden().brief("Administrator access required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
