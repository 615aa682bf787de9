use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::role::RoleSelection,
    role_router::{Submission, SubmitOutcome},
    utils::AppError,
};

#[derive(serde::Deserialize, Debug)]
pub struct RoleRequest {
    #[serde(default)]
    pub role: RoleSelection,
}

/// Decision handed back to a page script that prevented the default submit
/// and navigates on its own.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoleDecision {
    Navigate { target: String },
    Alert { message: String },
    NoAction,
}

impl From<SubmitOutcome> for RoleDecision {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Navigate(target) => Self::Navigate {
                target: target.to_string(),
            },
            SubmitOutcome::Alert(message) => Self::Alert { message },
            SubmitOutcome::NoAction => Self::NoAction,
        }
    }
}

#[instrument(
    name = "Route login role via api",
    skip(app_state, payload),
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn route_role(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<RoleRequest>, JsonRejection>,
) -> Result<Json<RoleDecision>, AppError> {
    let Json(request) = payload?;

    let outcome = Submission::new(request.role)
        .handle(&app_state.role_router)
        .into_outcome();

    Ok(Json(outcome.into()))
}
