//! Publishes the [`ClientConfig`] the server was started with.

use actix_web::{web, HttpResponse, Responder};
use common::config::ClientConfig;

pub const PATH: &str = "/app-config.json";

pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn returns_camel_case_config() {
        let config = ClientConfig {
            api_base_url: "http://localhost:5000/api".to_string(),
            items_per_page: 6,
            splash_ms: 0,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .route(PATH, web::get().to(process)),
        )
        .await;

        let req = test::TestRequest::get().uri(PATH).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["apiBaseUrl"], "http://localhost:5000/api");
        assert_eq!(body["itemsPerPage"], 6);
        assert_eq!(body["splashMs"], 0);
    }
}
