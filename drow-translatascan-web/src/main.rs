use axum::{
    Router,
    body::Bytes,
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use drow_translatascan::{Direction, GREETING, Language, Lexicon, Translator, load_lexicon_from_file};

mod config;

use config::ServerConfig;

/// Request parameters, from the query string or a form-encoded body
#[derive(Debug, Default)]
pub struct TranslateParams {
    pub text: Option<String>,
    pub lang: Option<String>,
    pub ver: Option<String>,
}

impl TranslateParams {
    /// Parse `application/x-www-form-urlencoded` pairs. The first value of
    /// a repeated key wins; unknown keys are ignored.
    fn parse(input: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
            let slot = match key.as_ref() {
                "text" => &mut params.text,
                "lang" => &mut params.lang,
                "ver" => &mut params.ver,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator<Lexicon>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::parse();
    config.validate()?;

    // The lexicon must be available before any request is served
    let lexicon = load_lexicon_from_file(&config.dictionary)?;
    info!(
        "📖 Loaded lexicon from {} ({} Common→Drow, {} Drow→Common entries)",
        config.dictionary.display(),
        lexicon.len(Direction::TO_DROW),
        lexicon.len(Direction::TO_COMMON)
    );

    let state = AppState {
        translator: Arc::new(Translator::new(lexicon)),
    };

    info!("🕷️ Starting Drow Translatascan Web Server");

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!("🚀 Server running at http://{}", config.listen);

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", get(translate_text).post(translate_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.into(),
    )
        .into_response()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn translate_text(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    let params = TranslateParams::parse(query.as_deref().unwrap_or_default());
    let mut text = non_empty(params.text);
    let mut lang = non_empty(params.lang);

    // Fall back to a form-encoded body for whatever the query string lacks.
    // A body that is not UTF-8 counts as empty.
    if (text.is_none() || lang.is_none()) && !body.is_empty() {
        let form = TranslateParams::parse(std::str::from_utf8(&body).unwrap_or_default());
        text = text.or(non_empty(form.text));
        lang = lang.or(non_empty(form.lang));
    }

    if non_empty(params.ver).is_some() {
        return plain_text(StatusCode::OK, GREETING);
    }

    let (Some(text), Some(lang)) = (text, lang) else {
        warn!("Rejected request without text or lang");
        return plain_text(
            StatusCode::BAD_REQUEST,
            "Please provide 'text' and 'lang' parameters.",
        );
    };

    let target: Language = match lang.parse() {
        Ok(language) => language,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return plain_text(StatusCode::BAD_REQUEST, e.to_string());
        }
    };
    let direction = Direction::towards(target);

    info!("Translating '{}' ({})", &text, direction);
    let translated = state.translator.translate(&text, direction);
    info!("Translated: {} → {}", &text, &translated);

    plain_text(StatusCode::OK, translated)
}
