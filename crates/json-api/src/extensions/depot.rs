//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use showroom_app::auth::Session;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session(&mut self, session: Session);

    fn session_or_401(&self) -> Result<&Session, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session(&mut self, session: Session) {
        self.inject(session);
    }

    fn session_or_401(&self) -> Result<&Session, StatusError> {
        self.obtain::<Session>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Sign in required"))
    }
}
