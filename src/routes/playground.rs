use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::services::errors::ServiceError;
use crate::services::playground as playground_service;

#[get("/")]
pub async fn show_playground(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match playground_service::run_playground(repo.get_ref()) {
        Ok(data) => {
            let mut context = tera::Context::new();
            context.insert("name", &data.name);
            context.insert("result", &data.stats);
            context.insert("tags", &data.tags);
            match tera.render("hello.html", &context) {
                Ok(body) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(body),
                Err(err) => {
                    log::error!("Failed to render the playground page: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Playground walkthrough failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
