use crate::error::Result;
use crate::pipeline::personalizer;
use crate::session::SessionState;
use crate::store::{Database, SupporterStore, TemplateStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use outreach_common::model::message::PersonalizedMessage;
use outreach_common::requests::PersonalizeRequest;

pub(crate) async fn process(
    payload: web::Json<PersonalizeRequest>,
    session: web::Data<SessionState>,
    db: web::Data<Database>,
) -> impl Responder {
    match generate(&payload.template_id, &session, db.get_ref()).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => e.error_response(),
    }
}

/// Runs the personalizer against the stores and stores the result in the session.
async fn generate(
    template_id: &str,
    session: &SessionState,
    db: &Database,
) -> Result<Vec<PersonalizedMessage>> {
    let selection = session.selection.read().await.clone();
    let template = db.get_template(template_id)?;
    let supporters = db.list()?;

    let messages = personalizer::personalize(template_id, template.as_ref(), &selection, &supporters)?;
    session.replace_messages(messages.clone()).await;
    Ok(messages)
}
