use crate::dtos::admission::{DepartmentResponse, RequirementTemplateResponse};
use axum::Json;
use models::{admission::default_requirements, department::Department};

/// List the courses an applicant may choose and the programs under each
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "Department catalog", body = Vec<DepartmentResponse>)
    ),
    tag = "Admissions"
)]
pub async fn get_departments() -> Json<Vec<DepartmentResponse>> {
    Json(Department::all().into_iter().map(Into::into).collect())
}

/// The requirement checklist a blank intake form is pre-filled with
#[utoipa::path(
    get,
    path = "/requirements",
    responses(
        (status = 200, description = "Default requirement checklist", body = Vec<RequirementTemplateResponse>)
    ),
    tag = "Admissions"
)]
pub async fn get_default_requirements() -> Json<Vec<RequirementTemplateResponse>> {
    Json(default_requirements().into_iter().map(Into::into).collect())
}
