//! Webhook handler for Netlify deploy_created events

use axum::{
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::SharedState;
use crate::card::NotificationCard;
use crate::error::{RelayError, Result};
use crate::webhook::{DEPLOY_CREATED_EVENT, DeployEvent, EVENT_HEADER};

/// Check the event header, decode the body and build the Teams card.
///
/// Pure: no I/O, so every rejection path is testable without a listener.
pub fn translate(headers: &HeaderMap, body: &[u8]) -> Result<NotificationCard> {
    let event_opt = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok());
    if event_opt != Some(DEPLOY_CREATED_EVENT) {
        return Err(RelayError::UnsupportedEvent);
    }

    let payload =
        DeployEvent::from_slice(body).map_err(|e| RelayError::InvalidPayload(e.to_string()))?;

    Ok(NotificationCard::from_deploy(&payload))
}

/// Handles the Netlify deploy_created hook and relays it to Teams.
pub async fn handle_deploy_created(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode> {
    let card = translate(&headers, &body).inspect_err(|e| {
        warn!(
            "Rejected deploy notification (event {:?}): {}",
            headers.get(EVENT_HEADER),
            e
        );
    })?;

    let delivery_id = Uuid::now_v7();
    let span = info_span!("deploy_created", %delivery_id);

    async {
        info!("Forwarding '{}' to {}", card.summary, state.teams.webhook_url());
        state.teams.send(&card).await
    }
    .instrument(span)
    .await?;

    Ok(StatusCode::OK)
}
