//! # Sync: the fetch / create / delete pipelines
//!
//! Each entity type runs the same three flows against its collection endpoint.
//! They are written once here, generic over the [`Resource`], the
//! [`Transport`] and the [`Dialogs`], and return what happened instead of
//! touching UI state. Components apply the outcome to the `Catalog` signal and
//! to modal/form state.
//!
//! | Flow | Requests | On failure |
//! |------|----------|------------|
//! | [`fetch_collection`] | `GET` | logged only |
//! | [`submit_create`] | `POST`, then `GET` on success | logged + alert, no re-fetch |
//! | [`confirm_delete`] | nothing if declined; else `DELETE` then `GET` | network errors logged + alert, no re-fetch; a non-2xx status still re-fetches, then alerts |
//!
//! Every flow is a single best-effort attempt. Nothing is deduplicated, so two
//! quick submits issue two `POST`s.

use api::{FetchError, RestClient, Transport};
use store::{EntityKind, Resource};
use tracing::{error, info, warn};

use crate::dialogs::Dialogs;

/// Result of [`submit_create`].
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome<R> {
    /// The record was created. `refreshed` is the re-fetched collection, or
    /// `None` if that fetch failed.
    Created { refreshed: Option<Vec<R>> },
    /// The create request failed and the user was alerted. Modal and form
    /// should stay as they are.
    Failed(FetchError),
}

/// Result of [`confirm_delete`].
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome<R> {
    /// The user said no; nothing was sent.
    Declined,
    /// The `DELETE` completed with `status` and the collection was re-fetched.
    Completed {
        status: u16,
        refreshed: Option<Vec<R>>,
    },
    /// The `DELETE` could not complete. No re-fetch happened.
    Failed(FetchError),
}

/// GET the collection for `R`. Errors are logged and swallowed.
pub async fn fetch_collection<R, T>(client: &RestClient<T>) -> Option<Vec<R>>
where
    R: Resource,
    T: Transport,
{
    match client.list::<R>().await {
        Ok(records) => Some(records),
        Err(e) => {
            error!("Error fetching {}: {}", R::KIND, e);
            None
        }
    }
}

/// POST `draft`; on success re-fetch the collection, on failure alert.
pub async fn submit_create<R, T, D>(
    client: &RestClient<T>,
    dialogs: &D,
    draft: &R::Draft,
) -> SubmitOutcome<R>
where
    R: Resource,
    T: Transport,
    D: Dialogs,
{
    match client.create::<R>(draft).await {
        Ok(()) => {
            info!("Created {}", R::KIND.singular());
            let refreshed = fetch_collection::<R, T>(client).await;
            SubmitOutcome::Created { refreshed }
        }
        Err(e) => {
            error!("Failed to create {}: {}", R::KIND.singular(), e);
            dialogs.alert(&create_failure_message(R::KIND, &e));
            SubmitOutcome::Failed(e)
        }
    }
}

/// Ask for confirmation, DELETE by id, then re-fetch whatever the status was.
pub async fn confirm_delete<R, T, D>(
    client: &RestClient<T>,
    dialogs: &D,
    id: i64,
) -> DeleteOutcome<R>
where
    R: Resource,
    T: Transport,
    D: Dialogs,
{
    if !dialogs.confirm(&delete_prompt(R::KIND)) {
        return DeleteOutcome::Declined;
    }

    let response = match client.delete::<R>(id).await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to delete {} {}: {}", R::KIND.singular(), id, e);
            dialogs.alert("Failed to delete");
            return DeleteOutcome::Failed(e);
        }
    };

    let refreshed = fetch_collection::<R, T>(client).await;

    if let Err(e) = api::ensure_success(response.clone()) {
        warn!("Delete of {} {} was rejected: {}", R::KIND.singular(), id, e);
        dialogs.alert(&format!(
            "Failed to delete {} ({})",
            R::KIND.singular(),
            e
        ));
    }

    DeleteOutcome::Completed {
        status: response.status,
        refreshed,
    }
}

/// Confirmation text, e.g. `"Delete this customer?"`.
pub fn delete_prompt(kind: EntityKind) -> String {
    format!("Delete this {}?", kind.singular())
}

/// Alert text for a failed create.
pub fn create_failure_message(kind: EntityKind, error: &FetchError) -> String {
    match error {
        FetchError::Http { .. } => {
            format!("Failed: Failed to create {} ({})", kind.singular(), error)
        }
        other => format!("Failed: {other}"),
    }
}
