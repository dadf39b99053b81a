//! Club HTTP Handlers
//!
//! 모든 경로는 `/api/v1/clubs` 아래에 있으며 Bearer 토큰이 필요합니다.

use actix_web::{delete, get, post, route, web, HttpResponse};
use crate::core::errors::AppResult;
use crate::domain::dto::{
    ClubQuery, ClubResponse, CreateClubRequest, EventResponse, FeedbackResponse, SubmitFeedbackRequest,
    UpdateClubRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::clubs::ClubService;
use crate::services::events::EventService;
use crate::services::feedback::FeedbackService;
use crate::services::membership::MembershipService;

/// `GET /clubs?search=&category=`
#[get("")]
pub async fn list_clubs(actor: AuthenticatedUser, query: web::Query<ClubQuery>) -> AppResult<HttpResponse> {
    let clubs: Vec<ClubResponse> = ClubService::instance()?
        .list(&actor, query.into_inner())
        .await?
        .into_iter()
        .map(ClubResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(clubs))
}

#[post("")]
pub async fn create_club(
    actor: AuthenticatedUser,
    payload: web::Json<CreateClubRequest>,
) -> AppResult<HttpResponse> {
    let club = ClubService::instance()?.create(&actor, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ClubResponse::from(club)))
}

#[get("/{club_id}")]
pub async fn get_club(actor: AuthenticatedUser, club_id: web::Path<String>) -> AppResult<HttpResponse> {
    let club = ClubService::instance()?.get(&actor, &club_id).await?;
    Ok(HttpResponse::Ok().json(ClubResponse::from(club)))
}

#[route("/{club_id}", method = "PATCH", method = "PUT")]
pub async fn update_club(
    actor: AuthenticatedUser,
    club_id: web::Path<String>,
    payload: web::Json<UpdateClubRequest>,
) -> AppResult<HttpResponse> {
    let club = ClubService::instance()?
        .update(&actor, &club_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ClubResponse::from(club)))
}

#[delete("/{club_id}")]
pub async fn delete_club(actor: AuthenticatedUser, club_id: web::Path<String>) -> AppResult<HttpResponse> {
    ClubService::instance()?.delete(&actor, &club_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{club_id}/join")]
pub async fn join_club(actor: AuthenticatedUser, club_id: web::Path<String>) -> AppResult<HttpResponse> {
    let club = MembershipService::instance()?.join_club(&actor, &club_id).await?;
    Ok(HttpResponse::Ok().json(ClubResponse::from(club)))
}

#[post("/{club_id}/leave")]
pub async fn leave_club(actor: AuthenticatedUser, club_id: web::Path<String>) -> AppResult<HttpResponse> {
    let club = MembershipService::instance()?.leave_club(&actor, &club_id).await?;
    Ok(HttpResponse::Ok().json(ClubResponse::from(club)))
}

#[get("/{club_id}/events")]
pub async fn club_events(actor: AuthenticatedUser, club_id: web::Path<String>) -> AppResult<HttpResponse> {
    let events: Vec<EventResponse> = EventService::instance()?
        .list_for_club(&actor, &club_id)
        .await?
        .into_iter()
        .map(EventResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(events))
}

#[get("/{club_id}/feedback")]
pub async fn list_feedback(actor: AuthenticatedUser, club_id: web::Path<String>) -> AppResult<HttpResponse> {
    let feedback: Vec<FeedbackResponse> = FeedbackService::instance()?
        .list(&actor, &club_id)
        .await?
        .into_iter()
        .map(FeedbackResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(feedback))
}

#[post("/{club_id}/feedback")]
pub async fn submit_feedback(
    actor: AuthenticatedUser,
    club_id: web::Path<String>,
    payload: web::Json<SubmitFeedbackRequest>,
) -> AppResult<HttpResponse> {
    let feedback = FeedbackService::instance()?
        .submit(&actor, &club_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(FeedbackResponse::from(feedback)))
}
