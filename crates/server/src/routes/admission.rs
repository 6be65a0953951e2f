use crate::{
    auth::CurrentAccount,
    dtos::admission::{
        AdmissionListParams, AdmissionNumberQuery, AdmissionRequest, AdmissionResponse,
        CreatedResponse, PaginatedAdmissionsResponse, PaginationMeta, StatusUpdateRequest,
    },
    error::AppError,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::{admission::AdmissionFilter, workflow::AdmissionWorkflow};
use models::{admission::AdmissionForm, validation::ValidationErrors};
use uuid::Uuid;

/// Submit a new admission
#[utoipa::path(
    post,
    path = "/admissions",
    request_body = AdmissionRequest,
    responses(
        (status = 201, description = "Admission submitted", body = CreatedResponse),
        (status = 422, description = "One or more fields failed validation"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admissions"
)]
pub async fn submit_admission(
    State(state): State<AppState>,
    Json(request): Json<AdmissionRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let form: AdmissionForm = request.into();
    let id = AdmissionWorkflow::submit_admission(&state.db, &form).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get an admission and its requirements by ID
#[utoipa::path(
    get,
    path = "/admissions/{id}",
    params(
        ("id" = Uuid, Path, description = "Admission ID")
    ),
    responses(
        (status = 200, description = "Admission found", body = AdmissionResponse),
        (status = 404, description = "Admission not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admissions"
)]
pub async fn get_admission_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdmissionResponse>, AppError> {
    match AdmissionWorkflow::get_by_id(&state.db, id).await? {
        Some(record) => Ok(Json(record.into())),
        None => Err(AppError::NotFound),
    }
}

/// Get every admission filed under an admission number
#[utoipa::path(
    get,
    path = "/admissions",
    params(AdmissionNumberQuery),
    responses(
        (status = 200, description = "Matching admissions, possibly none", body = Vec<AdmissionResponse>),
        (status = 400, description = "Missing admission number"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admissions"
)]
pub async fn get_admissions_by_number(
    State(state): State<AppState>,
    Query(query): Query<AdmissionNumberQuery>,
) -> Result<Json<Vec<AdmissionResponse>>, AppError> {
    let records = AdmissionWorkflow::get_by_admission_number(&state.db, &query.number).await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Save edits to an admission, replacing its requirement checklist
#[utoipa::path(
    put,
    path = "/admissions/{id}",
    params(
        ("id" = Uuid, Path, description = "Admission ID")
    ),
    request_body = AdmissionRequest,
    responses(
        (status = 204, description = "Admission saved"),
        (status = 404, description = "Admission not found"),
        (status = 422, description = "One or more fields failed validation"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admissions"
)]
pub async fn save_admission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AdmissionRequest>,
) -> Result<StatusCode, AppError> {
    let mut form: AdmissionForm = request.into();
    if form.id.is_some_and(|body_id| body_id != id) {
        return Err(ValidationErrors::single("id", "Admission id does not match the URL").into());
    }
    form.id = Some(id);

    AdmissionWorkflow::save_admission(&state.db, &form).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a page of admissions for review
#[utoipa::path(
    get,
    path = "/admin/admissions",
    params(AdmissionListParams),
    responses(
        (status = 200, description = "Admissions retrieved successfully", body = PaginatedAdmissionsResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Review"
)]
pub async fn list_admissions(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Query(params): Query<AdmissionListParams>,
) -> Result<Json<PaginatedAdmissionsResponse>, AppError> {
    account.require_admission_reviewer()?;

    let page = params.page.max(1);
    let per_page = params.per_page.clamp(1, 100);
    let filter = AdmissionFilter {
        status: params.status,
        search: params.search,
    };

    let (records, total_items) =
        AdmissionWorkflow::list_admissions(&state.db, filter, page, per_page).await?;

    let total_pages = total_items.div_ceil(per_page);
    let pagination = PaginationMeta {
        page,
        per_page,
        total_pages,
        total_items,
        has_next: page < total_pages,
        has_prev: page > 1,
    };

    Ok(Json(PaginatedAdmissionsResponse {
        admissions: records.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// Set the review status of an admission
#[utoipa::path(
    patch,
    path = "/admin/admissions/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Admission ID")
    ),
    request_body = StatusUpdateRequest,
    responses(
        (status = 204, description = "Status updated"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Admission not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Review"
)]
pub async fn set_admission_status(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<StatusCode, AppError> {
    account.require_admission_reviewer()?;

    AdmissionWorkflow::review_and_set_status(&state.db, id, request.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an admission and its requirements
#[utoipa::path(
    delete,
    path = "/admin/admissions/{id}",
    params(
        ("id" = Uuid, Path, description = "Admission ID")
    ),
    responses(
        (status = 204, description = "Admission deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Admission not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Review"
)]
pub async fn delete_admission(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    account.require_admission_reviewer()?;

    AdmissionWorkflow::remove_admission(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
