use crate::{
    auth::{CurrentAccount, calendar_token},
    dtos::event::{CalendarSetting, EventRequest, EventResponse},
    error::AppError,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use calendar::{CalendarClient, CalendarError};
use database::services::setting::SettingService;
use models::validation::ValidationErrors;

/// Resolves the configured calendar and a client for this request's token
async fn calendar_for(
    state: &AppState,
    account: &CurrentAccount,
    headers: &HeaderMap,
) -> Result<(CalendarClient, String), AppError> {
    account.require_event_manager()?;

    let calendar_id = SettingService::get_calendar_id(&state.db)
        .await?
        .ok_or(CalendarError::MissingCalendarId)?;
    let token = calendar_token(headers).ok_or(CalendarError::MissingAccessToken)?;

    Ok((CalendarClient::new(token)?, calendar_id))
}

/// Get the configured calendar ID
#[utoipa::path(
    get,
    path = "/admin/calendar",
    responses(
        (status = 200, description = "Current calendar setting", body = CalendarSetting),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn get_calendar(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
) -> Result<Json<CalendarSetting>, AppError> {
    account.require_event_manager()?;

    let calendar_id = SettingService::get_calendar_id(&state.db).await?;
    Ok(Json(CalendarSetting { calendar_id }))
}

/// Set the calendar the events screen uses
#[utoipa::path(
    put,
    path = "/admin/calendar",
    request_body = CalendarSetting,
    responses(
        (status = 204, description = "Calendar saved"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 422, description = "Calendar ID missing")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn set_calendar(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Json(setting): Json<CalendarSetting>,
) -> Result<StatusCode, AppError> {
    account.require_event_manager()?;

    let calendar_id = setting
        .calendar_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ValidationErrors::single("calendarId", "Calendar ID is required."))?;

    SettingService::set_calendar_id(&state.db, calendar_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List upcoming events on the office calendar
#[utoipa::path(
    get,
    path = "/admin/events",
    params(
        ("x-calendar-token" = String, Header, description = "Calendar provider access token")
    ),
    responses(
        (status = 200, description = "Upcoming events", body = Vec<EventResponse>),
        (status = 401, description = "Unauthorized or missing calendar token"),
        (status = 409, description = "No calendar configured"),
        (status = 502, description = "Calendar provider error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn get_events(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    headers: HeaderMap,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let (client, calendar_id) = calendar_for(&state, &account, &headers).await?;

    let events = client.list_upcoming(&calendar_id).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// Create an event on the office calendar
#[utoipa::path(
    post,
    path = "/admin/events",
    params(
        ("x-calendar-token" = String, Header, description = "Calendar provider access token")
    ),
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 401, description = "Unauthorized or missing calendar token"),
        (status = 409, description = "No calendar configured"),
        (status = 422, description = "One or more fields failed validation"),
        (status = 502, description = "Calendar provider error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    headers: HeaderMap,
    Json(request): Json<EventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let form = request.into_form(None);
    form.validate()?;

    let (client, calendar_id) = calendar_for(&state, &account, &headers).await?;
    let event = client.insert(&calendar_id, &form).await?;

    Ok((StatusCode::CREATED, Json(event.into())))
}

/// Get one event from the office calendar
#[utoipa::path(
    get,
    path = "/admin/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID"),
        ("x-calendar-token" = String, Header, description = "Calendar provider access token")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found"),
        (status = 502, description = "Calendar provider error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<EventResponse>, AppError> {
    let (client, calendar_id) = calendar_for(&state, &account, &headers).await?;

    let event = client.get(&calendar_id, &id).await?;
    Ok(Json(event.into()))
}

/// Replace an event on the office calendar
#[utoipa::path(
    put,
    path = "/admin/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID"),
        ("x-calendar-token" = String, Header, description = "Calendar provider access token")
    ),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 404, description = "Event not found"),
        (status = 422, description = "One or more fields failed validation"),
        (status = 502, description = "Calendar provider error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<EventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let form = request.into_form(Some(id.clone()));
    form.validate()?;

    let (client, calendar_id) = calendar_for(&state, &account, &headers).await?;
    let event = client.update(&calendar_id, &id, &form).await?;

    Ok(Json(event.into()))
}

/// Delete an event from the office calendar
#[utoipa::path(
    delete,
    path = "/admin/events/{id}",
    params(
        ("id" = String, Path, description = "Event ID"),
        ("x-calendar-token" = String, Header, description = "Calendar provider access token")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found"),
        (status = 502, description = "Calendar provider error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let (client, calendar_id) = calendar_for(&state, &account, &headers).await?;

    client.delete(&calendar_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
