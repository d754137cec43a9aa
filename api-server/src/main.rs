use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use lorem::{generate_text, GeneratedText, TextRequest, Unit};
use serde::{Deserialize, Serialize};

/// Largest accepted JSON body
const JSON_LIMIT: usize = 64 * 1024;

// Request/Response types

/// Query string for `GET /api/{unit}`
#[derive(Debug, Deserialize)]
struct UnitQuery {
    count: f64,
    #[serde(default)]
    deviation: f64,
    seed: Option<i64>,
    #[serde(default)]
    fixed_start: bool,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    success: bool,
    #[serde(flatten)]
    output: Option<GeneratedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GenerateResponse {
    fn error(message: String) -> HttpResponse {
        HttpResponse::BadRequest().json(GenerateResponse {
            success: false,
            output: None,
            error: Some(message),
        })
    }
}

fn respond(request: &TextRequest) -> HttpResponse {
    match generate_text(request) {
        Ok(output) => {
            tracing::info!(
                "Generated {} {} for seed: {}",
                output.items.len(),
                output.unit,
                output.seed
            );
            HttpResponse::Ok().json(GenerateResponse {
                success: true,
                output: Some(output),
                error: None,
            })
        }
        Err(e) => {
            tracing::error!("Failed to generate text: {}", e);
            GenerateResponse::error(e.to_string())
        }
    }
}

// API Handlers

/// POST /api/generate
/// Generate text from a full request body
async fn generate(req: web::Json<TextRequest>) -> impl Responder {
    tracing::info!(
        "Received generate request: {} x{} (seed: {:?})",
        req.unit,
        req.count,
        req.seed
    );
    respond(&req)
}

/// GET /api/{unit}
/// Generate text with default sentence and word lengths
async fn generate_unit(path: web::Path<String>, query: web::Query<UnitQuery>) -> impl Responder {
    let unit: Unit = match path.parse() {
        Ok(unit) => unit,
        Err(e) => return GenerateResponse::error(e),
    };
    tracing::info!("Received {} request: x{} (seed: {:?})", unit, query.count, query.seed);

    let mut request = TextRequest::new(unit, query.count);
    request.deviation = query.deviation;
    request.seed = query.seed;
    request.fixed_start = query.fixed_start;

    respond(&request)
}

/// GET /health
/// Health check endpoint
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "lorem-api"
    }))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT).error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(err, GenerateResponse::error(message))
            .into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(err, GenerateResponse::error(message))
            .into()
    }))
    .route("/health", web::get().to(health))
    .route("/api/generate", web::post().to(generate))
    .route("/api/{unit}", web::get().to(generate_unit));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Lorem API Server");

    let bind_address =
        std::env::var("LOREM_API_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!("Binding to {}", bind_address);

    HttpServer::new(|| App::new().wrap(Cors::permissive()).configure(routes))
        .bind(bind_address)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "lorem-api");
    }

    #[actix_web::test]
    async fn test_generate_paragraphs() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({
                "unit": "paragraphs",
                "count": 1.2,
                "deviation": 0.5,
                "seed": 47513
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["seed"], 47513);
        assert_eq!(body["unit"], "paragraphs");
        assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
        assert!(body["text"]
            .as_str()
            .is_some_and(|t| t.starts_with("Dictum eu justo tincidunt")));
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_generate_words_by_path() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/words?count=10&seed=47513")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(
            body["text"],
            "donec ligula purus hendrerit dis dui conubia orci ac dapibus"
        );
    }

    #[actix_web::test]
    async fn test_generate_reports_drawn_seed() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/sentences?count=2")
            .to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;
        let seed = first["seed"].as_u64().expect("seed in response");

        let req = test::TestRequest::get()
            .uri(&format!("/api/sentences?count=2&seed={}", seed))
            .to_request();
        let replay: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(replay["text"], first["text"]);
    }

    #[actix_web::test]
    async fn test_negative_seed_accepted() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/words?count=5&seed=-1")
            .to_request();
        let negative: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(negative["success"], true);
        assert_eq!(negative["seed"], 4_294_967_295u64);

        let req = test::TestRequest::get()
            .uri("/api/words?count=5&seed=4294967295")
            .to_request();
        let unsigned: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unsigned["text"], negative["text"]);
    }

    #[actix_web::test]
    async fn test_unknown_unit_rejected() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/chapters?count=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("chapters")));
    }

    #[actix_web::test]
    async fn test_invalid_request_rejected() {
        let app = test::init_service(App::new().configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({ "count": 1e9 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({ "count": 2, "colour": "red" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
