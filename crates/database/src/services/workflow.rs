use crate::{
    error::{StoreError, StoreResult},
    services::admission::{AdmissionFilter, AdmissionRecord, AdmissionRepository},
};
use log::{error, info};
use models::{admission::AdmissionForm, status::AdmissionStatus, validation::ValidationErrors};
use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

/// Intake and review actions over admissions.
///
/// Forms are validated before anything touches the store, and store
/// failures are logged and then returned to the caller.
pub struct AdmissionWorkflow;

impl AdmissionWorkflow {
    /// Validates and files a new admission, returning its id
    pub async fn submit_admission<C>(db: &C, form: &AdmissionForm) -> StoreResult<Uuid>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        form.validate()?;

        let result = AdmissionRepository::create(db, form, &form.requirements).await;
        match &result {
            Ok(id) => info!(
                "Admission {id} submitted for {} ({})",
                form.full_name(),
                form.admission_no
            ),
            Err(e) => error!("Error creating admission {}: {e}", form.admission_no),
        }

        result
    }

    /// Validates and overwrites an existing admission, including its checklist
    pub async fn save_admission<C>(db: &C, form: &AdmissionForm) -> StoreResult<()>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let id = form
            .id
            .ok_or_else(|| ValidationErrors::single("id", "Admission id is required to save"))?;
        form.validate()?;

        let result = AdmissionRepository::update(db, id, form, &form.requirements).await;
        match &result {
            Ok(()) => info!(
                "Admission {id} saved with {} requirements",
                form.requirements.len()
            ),
            Err(e) => log_failure("saving", id, e),
        }

        result
    }

    /// Moves an admission to any status; no transition is forbidden
    pub async fn review_and_set_status<C>(
        db: &C,
        id: Uuid,
        status: AdmissionStatus,
    ) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = AdmissionRepository::update_status(db, id, status).await;
        match &result {
            Ok(()) => info!("Admission {id} set to {status}"),
            Err(e) => log_failure("updating status of", id, e),
        }

        result
    }

    pub async fn remove_admission<C>(db: &C, id: Uuid) -> StoreResult<()>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let result = AdmissionRepository::delete(db, id).await;
        match &result {
            Ok(()) => info!("Admission {id} deleted"),
            Err(e) => log_failure("deleting", id, e),
        }

        result
    }

    pub async fn get_by_id<C>(db: &C, id: Uuid) -> StoreResult<Option<AdmissionRecord>>
    where
        C: ConnectionTrait,
    {
        AdmissionRepository::get_by_id(db, id)
            .await
            .inspect_err(|e| error!("Error fetching admission {id}: {e}"))
    }

    pub async fn get_by_admission_number<C>(
        db: &C,
        number: &str,
    ) -> StoreResult<Vec<AdmissionRecord>>
    where
        C: ConnectionTrait,
    {
        AdmissionRepository::get_by_admission_number(db, number)
            .await
            .inspect_err(|e| error!("Error fetching admissions numbered {number}: {e}"))
    }

    pub async fn list_admissions<C>(
        db: &C,
        filter: AdmissionFilter,
        page: u64,
        per_page: u64,
    ) -> StoreResult<(Vec<AdmissionRecord>, u64)>
    where
        C: ConnectionTrait,
    {
        AdmissionRepository::list(db, filter, page, per_page)
            .await
            .inspect_err(|e| error!("Error listing admissions: {e}"))
    }
}

fn log_failure(action: &str, id: Uuid, err: &StoreError) {
    if err.is_not_found() {
        info!("Admission {id} not found while {action} it");
    } else {
        error!("Error {action} admission {id}: {err}");
    }
}
