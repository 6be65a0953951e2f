use crate::{
    entities::{admissions, requirements},
    error::{StoreError, StoreResult},
};
use chrono::Utc;
use models::{
    admission::{AdmissionForm, RequirementForm},
    status::AdmissionStatus,
};
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::Expr,
};
use std::collections::HashMap;
use uuid::Uuid;

/// An admission together with its requirement checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionRecord {
    pub admission: admissions::Model,
    pub requirements: Vec<requirements::Model>,
}

impl AdmissionRecord {
    pub fn submitted_count(&self) -> usize {
        self.requirements.iter().filter(|r| r.is_submitted).count()
    }
}

/// Filters for the reviewer's admission table
#[derive(Debug, Clone, Default)]
pub struct AdmissionFilter {
    pub status: Option<AdmissionStatus>,
    /// Case-insensitive substring of "first [middle] last"
    pub search: Option<String>,
}

/// Lower-cased "first middle last", with no gap left by a missing middle name
const FULL_NAME_LIKE: &str = "LOWER(admissions.first_name || ' ' || \
    COALESCE(admissions.middle_name || ' ', '') || admissions.last_name) \
    LIKE $1 ESCAPE '\\'";

/// Makes `%`, `_` and `\` match literally in a LIKE pattern
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct AdmissionRepository;

impl AdmissionRepository {
    /// Default rows per page in the reviewer table
    pub const PAGE_SIZE: u64 = 5;

    /// Persists a new admission and its requirements in one transaction
    pub async fn create<C>(
        db: &C,
        form: &AdmissionForm,
        requirement_forms: &[RequirementForm],
    ) -> StoreResult<Uuid>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let now = Utc::now().naive_utc();
        let admission_id = Uuid::new_v4();

        let txn = db.begin().await?;

        admissions::ActiveModel {
            id: Set(admission_id),
            admission_no: Set(form.admission_no.clone()),
            first_name: Set(form.first_name.clone()),
            middle_name: Set(form.normalized_middle_name()),
            last_name: Set(form.last_name.clone()),
            email: Set(form.email.clone()),
            phone_number: Set(form.phone_number.clone()),
            course: Set(form.course.clone()),
            program: Set(form.program.clone()),
            status: Set(AdmissionStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        Self::insert_requirements(&txn, admission_id, requirement_forms).await?;

        txn.commit().await?;
        Ok(admission_id)
    }

    /// Fetches one admission with its requirements; `None` when absent
    pub async fn get_by_id<C>(db: &C, id: Uuid) -> StoreResult<Option<AdmissionRecord>>
    where
        C: ConnectionTrait,
    {
        let admission = match admissions::Entity::find_by_id(id).one(db).await? {
            Some(admission) => admission,
            None => return Ok(None),
        };

        let requirements = admission
            .find_related(requirements::Entity)
            .all(db)
            .await?;

        Ok(Some(AdmissionRecord {
            admission,
            requirements,
        }))
    }

    /// Every admission filed under `number`, possibly none
    pub async fn get_by_admission_number<C>(
        db: &C,
        number: &str,
    ) -> StoreResult<Vec<AdmissionRecord>>
    where
        C: ConnectionTrait,
    {
        let admissions = admissions::Entity::find()
            .filter(admissions::Column::AdmissionNo.eq(number))
            .order_by_asc(admissions::Column::CreatedAt)
            .all(db)
            .await?;

        Self::with_requirements(db, admissions).await
    }

    /// Replaces every scalar field and the whole requirement set atomically
    pub async fn update<C>(
        db: &C,
        id: Uuid,
        form: &AdmissionForm,
        requirement_forms: &[RequirementForm],
    ) -> StoreResult<()>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        let existing = admissions::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        // Status is only ever changed through `update_status`
        let mut admission: admissions::ActiveModel = existing.into();
        admission.admission_no = Set(form.admission_no.clone());
        admission.first_name = Set(form.first_name.clone());
        admission.middle_name = Set(form.normalized_middle_name());
        admission.last_name = Set(form.last_name.clone());
        admission.email = Set(form.email.clone());
        admission.phone_number = Set(form.phone_number.clone());
        admission.course = Set(form.course.clone());
        admission.program = Set(form.program.clone());
        admission.updated_at = Set(Utc::now().naive_utc());
        admission.update(&txn).await?;

        requirements::Entity::delete_many()
            .filter(requirements::Column::AdmissionId.eq(id))
            .exec(&txn)
            .await?;

        Self::insert_requirements(&txn, id, requirement_forms).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Sets the review status, leaving requirements untouched
    pub async fn update_status<C>(db: &C, id: Uuid, status: AdmissionStatus) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = admissions::Entity::update_many()
            .col_expr(admissions::Column::Status, Expr::value(status.to_value()))
            .col_expr(
                admissions::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(admissions::Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    /// Removes the admission and its requirements
    pub async fn delete<C>(db: &C, id: Uuid) -> StoreResult<()>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        // The foreign key cascades too, but not every store enforces it
        requirements::Entity::delete_many()
            .filter(requirements::Column::AdmissionId.eq(id))
            .exec(&txn)
            .await?;

        let result = admissions::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        txn.commit().await?;
        Ok(())
    }

    /// Lists admissions for the reviewer table, newest first
    pub async fn list<C>(
        db: &C,
        filter: AdmissionFilter,
        page: u64,
        per_page: u64,
    ) -> StoreResult<(Vec<AdmissionRecord>, u64)>
    where
        C: ConnectionTrait,
    {
        let mut condition = Condition::all();

        if let Some(status) = filter.status {
            condition = condition.add(admissions::Column::Status.eq(status));
        }

        if let Some(search) = filter.search {
            let term = search.split_whitespace().collect::<Vec<_>>().join(" ");
            if !term.is_empty() {
                let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
                condition = condition.add(Expr::cust_with_expr(FULL_NAME_LIKE, pattern));
            }
        }

        let query = admissions::Entity::find()
            .filter(condition)
            .order_by_desc(admissions::Column::CreatedAt);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page.max(1));
        let admissions = paginator.fetch_page(page.saturating_sub(1)).await?; // 0-based pages

        let records = Self::with_requirements(db, admissions).await?;
        Ok((records, total_items))
    }

    async fn insert_requirements<C>(
        db: &C,
        admission_id: Uuid,
        requirement_forms: &[RequirementForm],
    ) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        if requirement_forms.is_empty() {
            return Ok(());
        }

        let rows = requirement_forms.iter().map(|r| requirements::ActiveModel {
            id: Set(Uuid::new_v4()),
            admission_id: Set(admission_id),
            name: Set(r.name.clone()),
            is_submitted: Set(r.is_submitted),
        });

        requirements::Entity::insert_many(rows).exec(db).await?;
        Ok(())
    }

    /// Batch loads requirements for a set of admissions, keeping their order
    async fn with_requirements<C>(
        db: &C,
        admissions: Vec<admissions::Model>,
    ) -> StoreResult<Vec<AdmissionRecord>>
    where
        C: ConnectionTrait,
    {
        if admissions.is_empty() {
            return Ok(vec![]);
        }

        let admission_ids: Vec<Uuid> = admissions.iter().map(|a| a.id).collect();
        let requirements = requirements::Entity::find()
            .filter(requirements::Column::AdmissionId.is_in(admission_ids))
            .all(db)
            .await?;

        let mut requirements_by_admission: HashMap<Uuid, Vec<requirements::Model>> =
            HashMap::new();
        for requirement in requirements {
            requirements_by_admission
                .entry(requirement.admission_id)
                .or_default()
                .push(requirement);
        }

        Ok(admissions
            .into_iter()
            .map(|admission| {
                let requirements = requirements_by_admission
                    .remove(&admission.id)
                    .unwrap_or_default();
                AdmissionRecord {
                    admission,
                    requirements,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("ana cruz"), "ana cruz");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
