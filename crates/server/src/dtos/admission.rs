use chrono::NaiveDateTime;
use database::services::admission::AdmissionRecord;
use models::{
    admission::{AdmissionForm, RequirementForm},
    department::{Department, Program},
    status::AdmissionStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementRequest {
    pub name: String,
    pub is_submitted: bool,
}

/// Admission form as posted by an applicant
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    pub id: Option<Uuid>,
    pub admission_no: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub course: String,
    pub program: String,
    pub requirements: Vec<RequirementRequest>,
}

impl From<AdmissionRequest> for AdmissionForm {
    fn from(request: AdmissionRequest) -> Self {
        AdmissionForm {
            id: request.id,
            admission_no: request.admission_no,
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            course: request.course,
            program: request.program,
            requirements: request
                .requirements
                .into_iter()
                .map(|r| RequirementForm::new(r.name, r.is_submitted))
                .collect(),
        }
    }
}

/// One line of the checklist a new intake form starts with
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementTemplateResponse {
    pub name: String,
    pub is_submitted: bool,
}

impl From<RequirementForm> for RequirementTemplateResponse {
    fn from(requirement: RequirementForm) -> Self {
        RequirementTemplateResponse {
            name: requirement.name,
            is_submitted: requirement.is_submitted,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResponse {
    pub id: Uuid,
    pub name: String,
    pub is_submitted: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    pub id: Uuid,
    pub admission_no: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub course: String,
    pub program: String,
    #[schema(value_type = String, example = "Pending")]
    pub status: AdmissionStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub requirements: Vec<RequirementResponse>,
}

impl From<AdmissionRecord> for AdmissionResponse {
    fn from(record: AdmissionRecord) -> Self {
        let AdmissionRecord {
            admission,
            requirements,
        } = record;

        AdmissionResponse {
            id: admission.id,
            admission_no: admission.admission_no,
            first_name: admission.first_name,
            middle_name: admission.middle_name,
            last_name: admission.last_name,
            email: admission.email,
            phone_number: admission.phone_number,
            course: admission.course,
            program: admission.program,
            status: admission.status,
            created_at: admission.created_at,
            updated_at: admission.updated_at,
            requirements: requirements
                .into_iter()
                .map(|r| RequirementResponse {
                    id: r.id,
                    name: r.name,
                    is_submitted: r.is_submitted,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    #[schema(value_type = String, example = "Approved")]
    pub status: AdmissionStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdmissionNumberQuery {
    /// Applicant-supplied admission number
    pub number: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdmissionListParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    #[param(value_type = Option<String>)]
    pub status: Option<AdmissionStatus>,
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    5
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedAdmissionsResponse {
    pub admissions: Vec<AdmissionResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramResponse {
    pub name: String,
    pub shortname: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub name: String,
    pub shortname: String,
    pub programs: Vec<ProgramResponse>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        DepartmentResponse {
            name: department.name().to_string(),
            shortname: department.shortname().to_string(),
            programs: department
                .programs()
                .iter()
                .map(|Program { name, shortname }| ProgramResponse {
                    name: name.to_string(),
                    shortname: shortname.to_string(),
                })
                .collect(),
        }
    }
}
