use axum::{
    extract::{Form, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::{AppState, ConflictAction, InstanceForm};
use crate::render::TableView;
use crate::services::{self, DeleteOutcome};
use crate::templates::InstancesPageTemplate;
use crate::handlers::helpers::{
    build_template_globals, redirect_with_flash, render_template, FlashMessage, TemplateGlobals,
};

#[derive(Deserialize)]
pub struct AddInstanceForm {
    #[serde(flatten)]
    fields: InstanceForm,
    #[serde(default)]
    on_conflict: String,
}

#[derive(Deserialize)]
pub struct DeleteInstanceForm {
    #[serde(default)]
    instance_name: String,
}

pub async fn instances_get(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, globals) = build_template_globals(&state, jar);
    let TemplateGlobals { api_hostname, base_url, mut flash_messages, .. } = globals;

    let (table, load_failed) = match services::list_instances(&state).await {
        Ok(listing) => (listing.table, false),
        Err(e) => {
            tracing::error!(%e, "Failed to load instance list");
            flash_messages.push(FlashMessage::error(format!("Error loading instance list: {}", e)));
            (TableView::from_records::<crate::models::InstanceRecord>(&[]), true)
        }
    };
    let has_flash_messages = !flash_messages.is_empty();

    render_template(jar, InstancesPageTemplate {
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        table: &table,
        load_failed,
    })
}

pub async fn instances_add_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddInstanceForm>,
) -> impl IntoResponse {
    let on_conflict = ConflictAction::from_str(&form.on_conflict);
    let flash = match services::add_instance(&state, &form.fields, on_conflict).await {
        Ok(done) => FlashMessage::ok(done.message),
        Err(ServiceError::Form(e)) => FlashMessage::error(e.to_string()),
        Err(e) => {
            tracing::error!(%e, "Failed to add instance");
            FlashMessage::error(format!("Failed to add instance: {}", e))
        }
    };
    redirect_with_flash(&state, jar, "/instances", flash)
}

/// Reached from the confirmation page, so the delete is already confirmed.
pub async fn instances_delete_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<DeleteInstanceForm>,
) -> impl IntoResponse {
    let flash = match services::delete_instance(&state, &form.instance_name, |_| true).await {
        Ok(DeleteOutcome::Deleted(done)) => FlashMessage::ok(done.message),
        Ok(DeleteOutcome::Declined) => FlashMessage::ok("Nothing was deleted."),
        Err(ServiceError::Form(e)) => FlashMessage::error(e.to_string()),
        Err(e) => {
            tracing::error!(%e, instance_name = %form.instance_name, "Failed to delete instance");
            FlashMessage::error(format!("Failed to delete instance: {}", e))
        }
    };
    redirect_with_flash(&state, jar, "/instances", flash)
}
