use actix_web::web::Either;
use actix_web::{HttpResponse, Responder, post, web};

use crate::domain::staff::StaffIdentity;
use crate::dto::api::ApiResponse;
use crate::forms::tickets::GetTicketsForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tickets::list_staff_tickets;

/// Lists the tickets shared with the signed-in staff member.
///
/// Accepts the parameters as a urlencoded form or as a JSON object.
#[post("/staff/get-tickets")]
pub async fn get_tickets(
    staff: StaffIdentity,
    body: Either<web::Form<GetTicketsForm>, web::Json<GetTicketsForm>>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form = match body {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };

    match list_staff_tickets(repo.get_ref(), &staff, form, server_config.max_page_size) {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data)),
        Err(err) => error_response(&err),
    }
}
