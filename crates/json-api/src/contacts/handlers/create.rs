//! Create Contact Message Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showroom::contact::ContactMessage;
use uuid::Uuid;

use crate::{contacts::errors::into_status_error, extensions::*, state::State};

/// Contact Message Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactRequest {
    /// Sender name
    pub name: String,

    /// Sender email
    pub email: String,

    /// Optional subject line
    #[serde(default)]
    pub subject: String,

    /// Message body
    pub message: String,
}

impl From<ContactRequest> for ContactMessage {
    fn from(request: ContactRequest) -> Self {
        ContactMessage {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}

/// Contact Message Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactCreatedResponse {
    /// Stored message UUID
    pub uuid: Uuid,
}

/// Create Contact Message Handler
#[endpoint(
    tags("contacts"),
    summary = "Send Contact Message",
    responses(
        (status_code = StatusCode::CREATED, description = "Message stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid message"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ContactCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let stored = state
        .app
        .contact_flow()
        .submit(&json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ContactCreatedResponse {
        uuid: stored.uuid.into_uuid(),
    }))
}
