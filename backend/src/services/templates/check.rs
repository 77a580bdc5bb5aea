use crate::pipeline::personalizer;
use crate::services::templates::get::get_template;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub(crate) async fn process(template_id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match get_template(db.get_ref(), &template_id) {
        Ok(template) => HttpResponse::Ok().json(serde_json::json!({
            "template_id": template.id,
            "unrecognized": personalizer::unrecognized_tokens(&template),
        })),
        Err(e) => e.error_response(),
    }
}
