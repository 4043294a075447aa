use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::form::{validate_request, RosterRequest};
use crate::schedule::{LineAnalysis, RosterGenerator, RosterReport};
use crate::DEFAULT_SCENARIO;

/// Shared, read-only state. The generator is never mutated after startup.
pub struct AppState {
    pub generator: RosterGenerator,
    pub max_input_chars: usize,
}

#[derive(Serialize)]
pub struct RosterResponse {
    success: bool,
    variant: String,
    unfilled: usize,
    #[serde(flatten)]
    report: RosterReport,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    success: bool,
    lines: Vec<LineAnalysis>,
}

#[derive(Serialize)]
pub struct ScenarioResponse {
    text: &'static str,
}

fn bad_request(error: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({"success": false, "error": error}))
}

// Malformed or incomplete JSON bodies get the same shape as validation errors
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    InternalError::from_response(err, bad_request(message)).into()
}

// Roster generation endpoint
async fn generate_roster(
    req: web::Json<RosterRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(e) = validate_request(&req, state.max_input_chars) {
        return Ok(bad_request(e));
    }

    let roster = state.generator.generate(&req.text);
    Ok(HttpResponse::Ok().json(RosterResponse {
        success: true,
        variant: state.generator.variant().to_string(),
        unfilled: roster.unfilled().count(),
        report: roster.report(),
    }))
}

// Per-line classification endpoint
async fn classify_lines(
    req: web::Json<RosterRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if let Err(e) = validate_request(&req, state.max_input_chars) {
        return Ok(bad_request(e));
    }

    Ok(HttpResponse::Ok().json(ClassifyResponse {
        success: true,
        lines: state.generator.analyze(&req.text),
    }))
}

async fn scenario() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ScenarioResponse {
        text: DEFAULT_SCENARIO,
    }))
}

// HTML page handler
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Registers every route on an app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/", web::get().to(index))
        .route("/api/scenario", web::get().to(scenario))
        .route("/api/roster", web::post().to(generate_roster))
        .route("/api/classify", web::post().to(classify_lines));
}

pub async fn start_server(
    config: &ServerConfig,
    generator: RosterGenerator,
) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        generator,
        max_input_chars: config.max_input_chars,
    });

    tracing::info!(host = %config.host, port = config.port, "starting web server");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
