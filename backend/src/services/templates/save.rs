use crate::error::{PipelineError, Result};
use crate::pipeline::personalizer;
use crate::store::{Database, TemplateStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::info;
use outreach_common::model::template::Template;

pub(crate) async fn process(payload: web::Json<Template>, db: web::Data<Database>) -> impl Responder {
    match save_template(db.get_ref(), payload.into_inner()) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => e.error_response(),
    }
}

pub(crate) fn save_template(store: &dyn TemplateStore, mut template: Template) -> Result<Template> {
    if template.id.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "Template id must not be empty".to_string(),
        ));
    }
    if template.variables.is_empty() {
        template.variables = personalizer::template_tokens(&template);
    }

    store.save_template(&template)?;
    info!("saved template {} ({})", template.id, template.name);
    Ok(template)
}
