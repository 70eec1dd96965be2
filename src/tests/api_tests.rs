//! tests/api_tests.rs
//! Pruebas de los endpoints /api/sessions con actix_web::test.

#[cfg(test)]
mod tests {
    use actix_rt::test;
    use actix_web::{
        dev::{Service, ServiceResponse},
        http::{header, StatusCode},
        test::{call_and_read_body_json, call_service, init_service, read_body_json, TestRequest},
        web, App, Error,
    };
    use actix_http::Request;
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};

    use crate::app::init_app;
    use crate::config::app_config::AppConfig;
    use crate::services::session_service::SessionService;

    async fn test_app(
        config: AppConfig,
    ) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
        init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(SessionService::default()))
                .configure(init_app),
        )
        .await
    }

    async fn new_session(
        app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    ) -> String {
        let req = TestRequest::post().uri("/api/sessions").to_request();
        let body: Value = call_and_read_body_json(app, req).await;
        body["session_id"].as_str().expect("session_id").to_string()
    }

    fn upload_csv(id: &str, csv: &str) -> Request {
        TestRequest::post()
            .uri(&format!("/api/sessions/{}/customers", id))
            .insert_header((header::CONTENT_TYPE, "text/csv"))
            .set_payload(csv.to_string())
            .to_request()
    }

    fn tomorrow_schedule(channel: &str) -> Value {
        let tomorrow = Utc::now() + Duration::days(1);
        json!({
            "channel": channel,
            "date": tomorrow.format("%Y-%m-%d").to_string(),
            "time": tomorrow.format("%H:%M").to_string(),
            "utc_offset_minutes": 0
        })
    }

    #[test]
    async fn test_full_flow_email() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;

        let body: Value = call_and_read_body_json(
            &app,
            upload_csv(&id, "name,email\nAnn,ann@example.com\nBob,bob@example.com\nbad,row,x"),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 2);
        assert_eq!(body["headers"], json!(["name", "email"]));

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/messages", id))
            .set_json(json!({ "template": "Hola [name]!" }))
            .to_request();
        let preview: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(preview["count"], 2);
        assert_eq!(preview["messages"][1]["content"], "Hola Bob!");
        assert_eq!(preview["messages"][1]["to"], "Bob");

        let req = TestRequest::put()
            .uri(&format!("/api/sessions/{}/settings", id))
            .set_json(json!({ "email_api_key": "key", "email_sender": "ventas@example.com" }))
            .to_request();
        let settings: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(settings["credentials"]["email_api_key"], true);
        assert_eq!(settings["credentials"]["whatsapp_api_token"], false);

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/schedule", id))
            .set_json(tomorrow_schedule("email"))
            .to_request();
        let scheduled: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(scheduled["success"], true);
        assert_eq!(
            scheduled["message"],
            "Messages have been successfully scheduled."
        );
        assert_eq!(scheduled["entries"].as_array().unwrap().len(), 2);

        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}/log", id))
            .to_request();
        let log: Value = call_and_read_body_json(&app, req).await;
        let entries = log["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["recipient"], "Ann");
        assert_eq!(entries[0]["channel"], "email");
        assert_eq!(entries[0]["status"], "Success");
        assert_eq!(log["counts"]["success"], 2);

        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}", id))
            .to_request();
        let summary: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(summary["customers"], 2);
        assert_eq!(summary["drafts"], 2);
        assert_eq!(summary["has_image"], false);
    }

    #[test]
    async fn test_customers_require_csv_content_type() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;

        call_service(&app, upload_csv(&id, "name\nAnn")).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/customers", id))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("name\nAnn")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Please upload a valid CSV file.");

        // El archivo inválido vacía la lista anterior
        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}/customers", id))
            .to_request();
        let listing: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(listing["customers"].as_array().unwrap().len(), 0);
    }

    #[test]
    async fn test_customers_listing_keeps_column_order() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;
        call_service(&app, upload_csv(&id, "zeta,alpha\n1,2")).await;

        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}/customers", id))
            .to_request();
        let resp = call_service(&app, req).await;
        let raw = actix_web::test::read_body(resp).await;
        let text = std::str::from_utf8(&raw).unwrap();
        assert!(text.contains(r#"{"zeta":"1","alpha":"2"}"#), "{}", text);
    }

    #[test]
    async fn test_upload_too_large() {
        let config = AppConfig {
            max_upload_bytes: 8,
            ..AppConfig::default()
        };
        let app = test_app(config).await;
        let id = new_session(&app).await;

        let resp = call_service(&app, upload_csv(&id, "name\nsomebody-long")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "File too large: the limit is 8 bytes.");
    }

    #[test]
    async fn test_generate_without_customers() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/messages", id))
            .set_json(json!({ "template": "Hola" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Please upload customer data first.");
    }

    #[test]
    async fn test_schedule_without_messages() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/schedule", id))
            .set_json(json!({ "channel": "sms" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Please generate messages first.");
    }

    #[test]
    async fn test_schedule_in_the_past() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;
        call_service(&app, upload_csv(&id, "name\nAnn")).await;
        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/messages", id))
            .set_json(json!({ "template": "Hola" }))
            .to_request();
        call_service(&app, req).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/schedule", id))
            .set_json(json!({
                "channel": "sms",
                "date": "2000-01-01",
                "time": "10:00",
                "utc_offset_minutes": 0
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Cannot schedule messages in the past.");
    }

    #[test]
    async fn test_whatsapp_qr_flow() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;
        call_service(&app, upload_csv(&id, "name,phone\nAnn,1\nBob,2")).await;
        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/messages", id))
            .set_json(json!({ "template": "Hola [name]" }))
            .to_request();
        call_service(&app, req).await;

        let mut schedule = tomorrow_schedule("whatsapp");
        schedule["whatsapp_type"] = json!("qr_code");
        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/schedule", id))
            .set_json(schedule)
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["qr_code"]["text"], "https://wa.me/?text=Hola%20Ann");
        assert_eq!(body["qr_code"]["width"], 256);
        assert_eq!(body["entries"].as_array().unwrap().len(), 0);

        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}/log", id))
            .to_request();
        let log: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(log["entries"].as_array().unwrap().len(), 0);
    }

    #[test]
    async fn test_whatsapp_api_requires_credentials() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;
        call_service(&app, upload_csv(&id, "name\nAnn")).await;
        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/messages", id))
            .set_json(json!({ "template": "Hola" }))
            .to_request();
        call_service(&app, req).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/schedule", id))
            .set_json(tomorrow_schedule("whatsapp"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Please enter WhatsApp API credentials in the settings."
        );
    }

    #[test]
    async fn test_image_upload_attached_to_preview() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;
        call_service(&app, upload_csv(&id, "name\nAnn\nBob")).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/image", id))
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .set_payload(&b"abc"[..])
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["content_type"], "image/png");
        assert_eq!(body["size"], 3);

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/messages", id))
            .set_json(json!({ "template": "Hola [name]" }))
            .to_request();
        let preview: Value = call_and_read_body_json(&app, req).await;
        for msg in preview["messages"].as_array().unwrap() {
            assert_eq!(msg["image"], "data:image/png;base64,YWJj");
        }
    }

    #[test]
    async fn test_image_rejects_non_image() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;

        let req = TestRequest::post()
            .uri(&format!("/api/sessions/{}/image", id))
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .set_payload("hola")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    async fn test_unknown_session() {
        let app = test_app(AppConfig::default()).await;
        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}/log", uuid::Uuid::new_v4()))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Session not found");
    }

    #[test]
    async fn test_delete_session() {
        let app = test_app(AppConfig::default()).await;
        let id = new_session(&app).await;

        let req = TestRequest::delete()
            .uri(&format!("/api/sessions/{}", id))
            .to_request();
        assert_eq!(call_service(&app, req).await.status(), StatusCode::OK);

        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}", id))
            .to_request();
        assert_eq!(call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    async fn test_access_logger_passes_requests_through() {
        let app = init_service(
            App::new()
                .wrap(crate::logger::access_logger())
                .app_data(web::Data::new(AppConfig::default()))
                .app_data(web::Data::new(SessionService::default()))
                .configure(init_app),
        )
        .await;

        let req = TestRequest::post().uri("/api/sessions").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = TestRequest::get()
            .uri(&format!("/api/sessions/{}", uuid::Uuid::new_v4()))
            .to_request();
        assert_eq!(call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    async fn test_default_session_ttl_is_one_hour() {
        let config = AppConfig::default();
        assert_eq!(config.session_ttl(), std::time::Duration::from_secs(3600));
    }
}
