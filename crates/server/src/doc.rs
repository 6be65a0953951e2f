use crate::routes::{account, admission, auth, department, event, health, root};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        department::get_departments,
        department::get_default_requirements,
        admission::submit_admission,
        admission::get_admission_by_id,
        admission::get_admissions_by_number,
        admission::save_admission,
        admission::list_admissions,
        admission::set_admission_status,
        admission::delete_admission,
        auth::me,
        account::get_office_accounts,
        event::get_calendar,
        event::set_calendar,
        event::get_events,
        event::create_event,
        event::get_event,
        event::update_event,
        event::delete_event
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Admissions", description = "Applicant intake and tracking"),
        (name = "Review", description = "Admission review for office staff"),
        (name = "Accounts", description = "Office staff accounts"),
        (name = "Events", description = "Office calendar events"),
    ),
    info(
        title = "Office Portal API",
        version = "1.0.0",
        description = "Admissions, office accounts and calendar events",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
