//! App Context

use std::sync::Arc;

use showroom::catalog::{Catalog, CatalogError};
use thiserror::Error;

use crate::{
    auth::{AuthService, HttpAuthService, IdentityProviderConfig},
    database::{self, Db},
    domain::{
        contacts::{ContactsService, PgContactsService},
        feedback::{FeedbackService, PgFeedbackService},
        orders::{OrdersService, PgOrdersService},
    },
    flows::{CheckoutFlow, ContactFlow, FeedbackFlow, OrderDashboard},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to load catalog")]
    Catalog(#[from] CatalogError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<Catalog>,
    pub orders: Arc<dyn OrdersService>,
    pub feedback: Arc<dyn FeedbackService>,
    pub contacts: Arc<dyn ContactsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails or the
    /// embedded catalog cannot be loaded.
    pub async fn from_database_url(
        url: &str,
        identity_provider: IdentityProviderConfig,
    ) -> Result<Self, AppInitError> {
        let catalog = Catalog::furniture()?;

        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            catalog: Arc::new(catalog),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            feedback: Arc::new(PgFeedbackService::new(db.clone())),
            contacts: Arc::new(PgContactsService::new(db)),
            auth: Arc::new(HttpAuthService::new(identity_provider)),
        })
    }

    #[must_use]
    pub fn checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(Arc::clone(&self.orders))
    }

    #[must_use]
    pub fn dashboard(&self) -> OrderDashboard {
        OrderDashboard::new(Arc::clone(&self.orders))
    }

    #[must_use]
    pub fn feedback_flow(&self) -> FeedbackFlow {
        FeedbackFlow::new(Arc::clone(&self.feedback))
    }

    #[must_use]
    pub fn contact_flow(&self) -> ContactFlow {
        ContactFlow::new(Arc::clone(&self.contacts))
    }
}
