//! Event HTTP Handlers
//!
//! 모든 경로는 `/api/v1/events` 아래에 있으며 Bearer 토큰이 필요합니다.
//! 이벤트 일시는 RFC 3339 문자열로 주고받습니다.

use actix_web::{delete, get, post, route, web, HttpResponse};
use crate::core::errors::AppResult;
use crate::domain::dto::{CreateEventRequest, EventQuery, EventResponse, UpdateEventRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::events::EventService;
use crate::services::membership::MembershipService;

/// `GET /events?club=`
#[get("")]
pub async fn list_events(actor: AuthenticatedUser, query: web::Query<EventQuery>) -> AppResult<HttpResponse> {
    let events: Vec<EventResponse> = EventService::instance()?
        .list(&actor, query.club.as_deref())
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(events))
}

#[post("")]
pub async fn create_event(
    actor: AuthenticatedUser,
    payload: web::Json<CreateEventRequest>,
) -> AppResult<HttpResponse> {
    let event = EventService::instance()?.create(&actor, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(EventResponse::from(event)))
}

#[get("/{event_id}")]
pub async fn get_event(actor: AuthenticatedUser, event_id: web::Path<String>) -> AppResult<HttpResponse> {
    let event = EventService::instance()?.get(&actor, &event_id).await?;
    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

#[route("/{event_id}", method = "PATCH", method = "PUT")]
pub async fn update_event(
    actor: AuthenticatedUser,
    event_id: web::Path<String>,
    payload: web::Json<UpdateEventRequest>,
) -> AppResult<HttpResponse> {
    let event = EventService::instance()?
        .update(&actor, &event_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

#[delete("/{event_id}")]
pub async fn delete_event(actor: AuthenticatedUser, event_id: web::Path<String>) -> AppResult<HttpResponse> {
    EventService::instance()?.delete(&actor, &event_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{event_id}/register")]
pub async fn register_for_event(actor: AuthenticatedUser, event_id: web::Path<String>) -> AppResult<HttpResponse> {
    let event = MembershipService::instance()?
        .register_for_event(&actor, &event_id)
        .await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}

#[post("/{event_id}/unregister")]
pub async fn unregister_from_event(actor: AuthenticatedUser, event_id: web::Path<String>) -> AppResult<HttpResponse> {
    let event = MembershipService::instance()?
        .unregister_from_event(&actor, &event_id)
        .await?;

    Ok(HttpResponse::Ok().json(EventResponse::from(event)))
}
