use std::sync::Arc;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{self, IntoResponse},
};
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::role::RoleSelection,
    role_router::{Submission, SubmitOutcome},
    routers::login::LoginPage,
};

#[derive(serde::Deserialize)]
pub struct LoginForm {
    // Absent when no radio in the group is checked.
    pub role: Option<String>,
}

#[instrument(
    name = "Login role submit",
    skip(app_state, payload),
    fields(
        request_id = %uuid::Uuid::new_v4(),
        role = tracing::field::Empty,
    )
)]
pub async fn login(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Form<LoginForm>, FormRejection>,
) -> response::Response {
    let selection = match payload {
        Ok(Form(form)) => RoleSelection::from(form.role),
        Err(rejection) => {
            tracing::info!(
                error.message = %rejection,
                "Unreadable login form, treating it as no role selected"
            );
            RoleSelection::NoneSelected
        }
    };
    if let Some(role) = role_field(&selection) {
        tracing::Span::current().record("role", tracing::field::display(role));
    }

    let submission = Submission::new(selection).handle(&app_state.role_router);

    match submission.into_outcome() {
        SubmitOutcome::Navigate(target) => {
            tracing::info!("Sending user to {target}");
            response::Redirect::to(target.as_ref()).into_response()
        }
        SubmitOutcome::Alert(message) => LoginPage {
            alert: Some(&message),
        }
        .into_response(),
        SubmitOutcome::NoAction => StatusCode::NO_CONTENT.into_response(),
    }
}

fn role_field(selection: &RoleSelection) -> Option<&str> {
    match selection {
        RoleSelection::NoneSelected => None,
        RoleSelection::Known(role) => Some(role.as_str()),
        RoleSelection::Unrecognized(value) => Some(value),
    }
}
