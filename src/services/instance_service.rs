use crate::api;
use crate::error::{ApiError, FormError, ServiceError};
use crate::forms;
use crate::models::{AppState, ConfirmationAction, ConflictAction, InstanceForm, InstanceRecord};
use crate::render::TableView;
use super::{DeleteOutcome, Mutation};

/// The instance table as last loaded
#[derive(Debug, Clone)]
pub struct InstanceListing {
    pub instances: Vec<InstanceRecord>,
    pub table: TableView,
}

impl InstanceListing {
    pub fn new(instances: Vec<InstanceRecord>) -> Self {
        let table = TableView::from_records(&instances);
        Self { instances, table }
    }
}

pub async fn list_instances(state: &AppState) -> Result<InstanceListing, ApiError> {
    let instances = api::load_instances(&state.client, &state.api_base_url).await?;
    tracing::debug!(count = instances.len(), "Loaded instances");
    Ok(InstanceListing::new(instances))
}

/// Validate, submit, then reload the whole list.
pub async fn add_instance(
    state: &AppState,
    form: &InstanceForm,
    on_conflict: Option<ConflictAction>,
) -> Result<Mutation<InstanceListing>, ServiceError> {
    let body = forms::instance_payload(form)?;
    let message = api::add_instance(&state.client, &state.api_base_url, body, on_conflict).await?;
    tracing::info!(instance_name = %form.instance_name.trim(), %message, "Instance submitted");
    let listing = list_instances(state).await?;
    Ok(Mutation { message, listing })
}

/// Ask `confirm` first; only a confirmed delete reaches the backend. Reloads the list afterwards.
pub async fn delete_instance<F>(
    state: &AppState,
    instance_name: &str,
    confirm: F,
) -> Result<DeleteOutcome<InstanceListing>, ServiceError>
where
    F: FnOnce(&str) -> bool,
{
    if instance_name.trim().is_empty() {
        return Err(FormError::MissingField("Instance Name").into());
    }
    if !confirm(&ConfirmationAction::DeleteInstance.prompt(instance_name)) {
        tracing::info!(instance_name, "Instance delete declined");
        return Ok(DeleteOutcome::Declined);
    }
    let message = api::delete_instance(&state.client, &state.api_base_url, instance_name).await?;
    let listing = list_instances(state).await?;
    Ok(DeleteOutcome::Deleted(Mutation { message, listing }))
}
