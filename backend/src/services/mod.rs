pub mod analytics;
pub mod campaigns;
pub mod data_sources;
pub mod directory;
pub mod import;
pub mod personalize;
pub mod selection;
pub mod supporters;
pub mod templates;

#[cfg(test)]
mod tests {
    //! End-to-end runs of the console flow over the HTTP surface.

    use crate::config::Settings;
    use crate::job_controller::state::{start_job_updater, JobsState};
    use crate::pipeline::normalizer::IdSequence;
    use crate::services;
    use crate::session::SessionState;
    use crate::store::tests::temp_database;
    use crate::store::{Database, SupporterStore};
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use outreach_common::jobs::JobStatus;
    use outreach_common::model::campaign::{Campaign, CampaignStatus};
    use outreach_common::model::directory::{ConsentStatus, DirectoryMember, DirectoryStats};
    use outreach_common::model::import::{ImportSummary, UploadAccepted, UploadSummary};
    use outreach_common::model::message::PersonalizedMessage;
    use outreach_common::model::selection::SelectionSnapshot;
    use outreach_common::model::supporter::Supporter;
    use serde_json::json;
    use std::time::Duration;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        db: Database,
        session: SessionState,
        jobs: JobsState,
        settings: Settings,
    }

    /// Must be called inside the test runtime: it spawns the job updater.
    fn fixture() -> Fixture {
        let (dir, db) = temp_database();
        let (jobs, rx) = JobsState::new(8);
        let updater = jobs.clone();
        actix_web::rt::spawn(async move { start_job_updater(updater, rx).await });
        Fixture {
            _dir: dir,
            db,
            session: SessionState::default(),
            jobs,
            settings: Settings::default(),
        }
    }

    macro_rules! app {
        ($fx:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($fx.jobs.clone()))
                    .app_data(web::Data::new($fx.session.clone()))
                    .app_data(web::Data::new($fx.db.clone()))
                    .app_data(web::Data::new(IdSequence::new()))
                    .app_data(web::Data::new($fx.settings.clone()))
                    .service(services::templates::configure_routes())
                    .service(services::campaigns::configure_routes())
                    .service(services::data_sources::csv::configure_routes())
                    .service(services::import::configure_routes())
                    .service(services::supporters::configure_routes())
                    .service(services::selection::configure_routes())
                    .service(services::personalize::configure_routes())
                    .service(services::directory::configure_routes())
                    .service(services::analytics::configure_routes()),
            )
            .await
        };
    }

    const BOUNDARY: &str = "outreach-test-boundary";

    /// A multipart body with one part per `(name, filename, content)`.
    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> Vec<u8> {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{}\r\n", BOUNDARY));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: text/csv\r\n\r\n",
                    name, filename
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    name
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        body.into_bytes()
    }

    fn upload_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/data_sources/csv/upload")
            .insert_header((
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    /// Twelve importable people followed by three rows without a usable name.
    fn sheet_with_rejects() -> String {
        let mut sheet = String::from("First Name,Last Name,Email,Company\n");
        for i in 0..12 {
            sheet.push_str(&format!("Person{},Number{},p{}@example.org,Food Bank\n", i, i, i));
        }
        sheet.push_str("Solo,,solo@example.org,\n");
        sheet.push_str(",Nofirst,nofirst@example.org,\n");
        sheet.push_str(",,blank-name@example.org,Somewhere\n");
        sheet
    }

    fn seed_supporters(db: &Database) -> Vec<Supporter> {
        use crate::pipeline::normalizer::{normalize, tests::FixedScorer};
        use outreach_common::model::raw_row::RawRow;
        use outreach_common::model::supporter::Segment;

        let rows: Vec<RawRow> = vec![
            [("Name", "Kay Lee"), ("Company", "")].into_iter().collect(),
            [("Name", "Ann Bell"), ("Company", "Food Bank")].into_iter().collect(),
        ];
        let outcome = normalize(&rows, 1, &IdSequence::new(), &mut FixedScorer(50, Segment::New));
        db.add_many(&outcome.supporters).unwrap();
        outcome.supporters
    }

    #[actix_web::test]
    async fn select_and_personalize() {
        let fx = fixture();
        let supporters = seed_supporters(&fx.db);
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(json!({
                "id": "welcome",
                "name": "Welcome",
                "type": "email",
                "subject": "Hello {{first_name}}",
                "content": "Hi {{first_name}}, from {{organization}}",
                "status": "approved"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        // nobody selected yet
        let req = test::TestRequest::post()
            .uri("/api/personalize")
            .set_json(json!({ "template_id": "welcome" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let kay = supporters[0].id.clone();
        let req = test::TestRequest::put()
            .uri("/api/selection")
            .set_json(json!({ "ids": [kay, "stale-id"] }))
            .to_request();
        let snapshot: SelectionSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot.count, 2);

        let req = test::TestRequest::post()
            .uri("/api/personalize")
            .set_json(json!({ "template_id": "missing" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/personalize")
            .set_json(json!({ "template_id": "welcome" }))
            .to_request();
        let messages: Vec<PersonalizedMessage> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].rendered_subject, "Hello Kay");
        assert_eq!(messages[0].rendered_content, "Hi Kay, from your organization");

        let req = test::TestRequest::get().uri("/api/personalize").to_request();
        let stored: Vec<PersonalizedMessage> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored, messages);
    }

    #[actix_web::test]
    async fn toggle_twice_then_clear() {
        let fx = fixture();
        let app = app!(fx);

        for expected in [1, 0] {
            let req = test::TestRequest::post()
                .uri("/api/selection/toggle/abc")
                .to_request();
            let snapshot: SelectionSnapshot = test::call_and_read_body_json(&app, req).await;
            assert_eq!(snapshot.count, expected);
        }

        let req = test::TestRequest::post()
            .uri("/api/selection/toggle/xyz")
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::delete().uri("/api/selection").to_request();
        let snapshot: SelectionSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snapshot, SelectionSnapshot::default());
    }

    #[actix_web::test]
    async fn committing_an_unknown_upload_is_not_found() {
        let fx = fixture();
        let app = app!(fx);
        let req = test::TestRequest::post()
            .uri("/api/import/commit")
            .set_json(json!({ "upload_id": "nothing-here" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_job_status_is_not_found() {
        let fx = fixture();
        let app = app!(fx);
        let req = test::TestRequest::get()
            .uri("/api/data_sources/csv/status/nope")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn supporter_update_and_delete() {
        let fx = fixture();
        let supporters = seed_supporters(&fx.db);
        let app = app!(fx);
        let id = &supporters[1].id;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/supporters/{}", id))
            .set_json(json!({ "phone": "555-0100" }))
            .to_request();
        let updated: Supporter = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.phone, "555-0100");
        assert_eq!(updated.organization, "Food Bank");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/supporters/{}", id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/supporters").to_request();
        let remaining: Vec<Supporter> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(remaining.len(), 1);
    }

    #[actix_web::test]
    async fn directory_consent_flow() {
        let fx = fixture();
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/api/directory")
            .set_json(json!({ "name": "John Smith", "company": "Tech Corp", "industry": "Technology" }))
            .to_request();
        let member: DirectoryMember = test::call_and_read_body_json(&app, req).await;
        assert_eq!(member.consent_status, ConsentStatus::Pending);

        let req = test::TestRequest::post()
            .uri(&format!("/api/directory/{}/consent", member.id))
            .set_json(json!({ "status": "granted", "notes": "Email response" }))
            .to_request();
        let member: DirectoryMember = test::call_and_read_body_json(&app, req).await;
        assert_eq!(member.consent_status, ConsentStatus::Granted);
        assert!(member.consent_date.is_some());

        let req = test::TestRequest::get()
            .uri("/api/directory?search=tech&status=granted")
            .to_request();
        let found: Vec<DirectoryMember> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/directory?status=sometimes")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/directory/stats").to_request();
        let stats: DirectoryStats = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stats.granted, 1);
        assert_eq!(stats.total, 1);

        let req = test::TestRequest::post()
            .uri("/api/directory/99/consent")
            .set_json(json!({ "status": "declined" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn template_check_lists_unknown_tokens() {
        let fx = fixture();
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/api/templates/save")
            .set_json(json!({
                "id": "typo",
                "name": "Typo",
                "type": "sms",
                "content": "Hi {{first_name}} {{frist_name}}"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/templates/typo/check").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["unrecognized"], json!(["frist_name"]));
    }

    #[actix_web::test]
    async fn multipart_upload_then_commit() {
        let fx = fixture();
        let app = app!(fx);
        let sheet = sheet_with_rejects();

        let body = multipart_body(&[
            ("note", None, "quarterly list"),
            ("file", Some("supporters.csv"), sheet.as_str()),
        ]);
        let resp = test::call_service(&app, upload_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let accepted: UploadAccepted = test::read_body_json(resp).await;

        let mut summary = None;
        for _ in 0..200 {
            let req = test::TestRequest::get()
                .uri(&format!("/api/data_sources/csv/status/{}", accepted.job_id))
                .to_request();
            let status: JobStatus = test::call_and_read_body_json(&app, req).await;
            match status {
                JobStatus::Completed(json) => {
                    summary = Some(serde_json::from_str::<UploadSummary>(&json).unwrap());
                    break;
                }
                JobStatus::Failed(reason) => panic!("parse failed: {}", reason),
                _ => actix_web::rt::time::sleep(Duration::from_millis(10)).await,
            }
        }
        let summary = summary.expect("parse job did not finish");
        assert_eq!(summary.upload_id, accepted.upload_id);
        assert_eq!((summary.extracted, summary.rejected), (12, 3));

        let req = test::TestRequest::post()
            .uri("/api/import/commit")
            .set_json(json!({ "upload_id": accepted.upload_id }))
            .to_request();
        let imported: ImportSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!((imported.accepted, imported.rejected), (12, 3));
        assert_eq!(fx.db.list().unwrap().len(), 12);
    }

    #[actix_web::test]
    async fn upload_must_be_a_csv_file() {
        let fx = fixture();
        let app = app!(fx);

        let body = multipart_body(&[("file", Some("supporters.txt"), "Name\nKay Lee\n")]);
        let resp = test::call_service(&app, upload_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let text = test::read_body(resp).await;
        assert!(std::str::from_utf8(&text).unwrap().contains(".csv"));
    }

    #[actix_web::test]
    async fn upload_without_a_file_field_is_refused() {
        let fx = fixture();
        let app = app!(fx);

        let body = multipart_body(&[("sheet", Some("supporters.csv"), "Name\nKay Lee\n")]);
        let resp = test::call_service(&app, upload_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let text = test::read_body(resp).await;
        assert!(std::str::from_utf8(&text).unwrap().contains("Missing file"));
        assert!(fx.jobs.jobs.read().await.is_empty());
    }

    #[actix_web::test]
    async fn oversized_upload_is_refused() {
        let mut fx = fixture();
        fx.settings.upload_limit_bytes = 64;
        let app = app!(fx);

        let sheet = sheet_with_rejects();
        assert!(sheet.len() > 64);
        let body = multipart_body(&[("file", Some("supporters.csv"), sheet.as_str())]);
        let resp = test::call_service(&app, upload_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let text = test::read_body(resp).await;
        assert!(std::str::from_utf8(&text).unwrap().contains("upload limit"));
        assert!(fx.jobs.jobs.read().await.is_empty());
    }

    #[actix_web::test]
    async fn campaign_lifecycle() {
        let fx = fixture();
        let app = app!(fx);

        let req = test::TestRequest::post()
            .uri("/api/campaigns")
            .set_json(json!({ "name": "Spring drive", "startDate": "2026-03-01", "templateIds": ["nope"] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/campaigns")
            .set_json(json!({ "name": "Spring drive", "startDate": "2026-03-01", "targetAmount": 5000 }))
            .to_request();
        let created: Campaign = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.status, CampaignStatus::Draft);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/campaigns/{}", created.id))
            .set_json(json!({ "status": "active", "currentAmount": 1200 }))
            .to_request();
        let updated: Campaign = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.status, CampaignStatus::Active);
        assert_eq!(updated.current_amount, Some(1200));

        let req = test::TestRequest::put()
            .uri("/api/campaigns/active")
            .set_json(json!({ "campaign_id": created.id }))
            .to_request();
        let active: Option<Campaign> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(active.map(|c| c.id), Some(created.id.clone()));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/campaigns/{}", created.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/campaigns/active").to_request();
        let active: Option<Campaign> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(active, None);
        assert_eq!(fx.session.active_campaign().await, None);

        let req = test::TestRequest::get()
            .uri(&format!("/api/campaigns/{}", created.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
