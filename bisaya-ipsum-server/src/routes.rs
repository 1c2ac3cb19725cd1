use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, error, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};

use bisaya_ipsum_core::error::IpsumError;
use bisaya_ipsum_core::model::curse_level::CurseLevel;
use bisaya_ipsum_core::model::generate_options::{
	GenerateOptions, SentenceRange, clamp_paragraphs, validate_paragraphs,
};
use bisaya_ipsum_core::model::generator::Generator;

pub const HEALTH_MESSAGE: &str = "Chada ra! 🔥";

/// Largest sentence bound accepted in a `POST /api/generate` body.
pub const MAX_SENTENCES: usize = 50;

const CATEGORY_ERROR: &str = "Invalid category. Use: subjects, verbs, adjectives, curseWords, locations, etc.";
const BODY_ERROR: &str = "Invalid request body, buang!";

/// State shared by every worker: the generator is read-only, so no lock is needed.
pub struct SharedData {
	pub generator: Generator<'static>,
}

impl Default for SharedData {
	fn default() -> Self {
		Self { generator: Generator::default() }
	}
}

/// Query parameters of `GET /api/generate`
///
/// Kept as raw strings so malformed values get the same error payload as out-of-range ones.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateParams {
	paragraphs: Option<String>,
	curse_level: Option<String>,
	format: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LevelParams {
	curse_level: Option<String>,
}

/// Body of `POST /api/generate`, every field optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
	paragraphs: Option<i64>,
	curse_level: Option<CurseLevel>,
	sentences_per_paragraph: Option<SentenceRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
	Json,
	Text,
	Html,
}

impl Format {
	/// Unknown formats fall back to JSON.
	fn parse(value: Option<&str>) -> Self {
		match value {
			Some("text") => Format::Text,
			Some("html") => Format::Html,
			_ => Format::Json,
		}
	}
}

impl GenerateParams {
	/// Requested paragraph count, checked against the accepted range.
	fn paragraphs(&self) -> Result<usize, IpsumError> {
		match self.paragraphs.as_deref().map(str::trim) {
			None | Some("") => Ok(GenerateOptions::default().paragraphs),
			// Non-integers are rejected like out-of-range counts
			Some(s) => validate_paragraphs(s.parse::<i64>().unwrap_or(0)),
		}
	}
}

impl GenerateBody {
	/// Merges the body over the defaults, forcing counts into range.
	fn options(&self) -> GenerateOptions {
		let defaults = GenerateOptions::default();
		GenerateOptions {
			paragraphs: self.paragraphs.map_or(defaults.paragraphs, clamp_paragraphs),
			curse_level: self.curse_level.unwrap_or_default(),
			sentences_per_paragraph: self
				.sentences_per_paragraph
				.map_or(defaults.sentences_per_paragraph, clamp_sentences),
		}
	}
}

fn clamp_sentences(range: SentenceRange) -> SentenceRange {
	SentenceRange::new(range.min.clamp(1, MAX_SENTENCES), range.max.clamp(1, MAX_SENTENCES))
}

/// Missing or empty values mean the default level.
fn parse_curse_level(value: Option<&str>) -> Result<CurseLevel, IpsumError> {
	match value.map(str::trim) {
		None | Some("") => Ok(CurseLevel::default()),
		Some(s) => s.parse(),
	}
}

#[derive(Serialize)]
struct Failure<'a> {
	success: bool,
	error: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestedOptions {
	paragraphs: usize,
	curse_level: CurseLevel,
}

#[derive(Serialize)]
struct Generated {
	paragraphs: Vec<String>,
	text: String,
}

impl Generated {
	fn new(paragraphs: Vec<String>) -> Self {
		let text = paragraphs.join("\n\n");
		Self { paragraphs, text }
	}
}

#[derive(Serialize)]
struct GenerateResponse<O: Serialize> {
	success: bool,
	options: O,
	data: Generated,
}

fn failure(status: StatusCode, error: &str) -> HttpResponse {
	HttpResponse::build(status).json(Failure { success: false, error })
}

/// Maps a library error to its HTTP status and payload.
fn error_response(err: &IpsumError) -> HttpResponse {
	match err {
		IpsumError::NotFound(_) => failure(StatusCode::NOT_FOUND, CATEGORY_ERROR),
		IpsumError::InvalidOption(message) => failure(StatusCode::BAD_REQUEST, message),
		IpsumError::EmptyCategory(_) => failure(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
	}
}

/// Malformed JSON bodies get the same `{success, error}` payload as other rejections.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		log::debug!("Rejected request body: {err}");
		error::InternalError::from_response(err, failure(StatusCode::BAD_REQUEST, BODY_ERROR)).into()
	})
}

#[get("/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().json(json!({ "status": "ok", "message": HEALTH_MESSAGE }))
}

/// HTTP GET endpoint `/api/words`
///
/// Returns the whole word bank with per-category counts and the total.
#[get("/words")]
async fn get_words(data: web::Data<SharedData>) -> impl Responder {
	let words = data.generator.words();
	let mut counts = Map::new();
	for (category, phrases) in words.iter() {
		counts.insert(category.as_str().to_owned(), phrases.len().into());
	}
	counts.insert("total".to_owned(), words.total().into());

	HttpResponse::Ok().json(json!({ "success": true, "data": words, "counts": counts }))
}

#[get("/words/{category}")]
async fn get_category(data: web::Data<SharedData>, path: web::Path<String>) -> impl Responder {
	match data.generator.words().lookup(path.as_str()) {
		Ok((category, phrases)) => HttpResponse::Ok().json(json!({
			"success": true,
			"category": category,
			"data": phrases,
			"count": phrases.len(),
		})),
		Err(e) => error_response(&e),
	}
}

/// HTTP GET endpoint `/api/generate`
///
/// Generates `paragraphs` paragraphs (1 to 50) at `curseLevel` and returns
/// them as JSON, plain text or HTML depending on `format`.
#[get("/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let paragraphs = match query.paragraphs() {
		Ok(n) => n,
		Err(e) => return error_response(&e),
	};
	let curse_level = match parse_curse_level(query.curse_level.as_deref()) {
		Ok(level) => level,
		Err(e) => return error_response(&e),
	};

	let options = GenerateOptions { paragraphs, curse_level, ..GenerateOptions::default() };
	let result = data.generator.generate_ipsum(&options, &mut rand::rng());

	match Format::parse(query.format.as_deref()) {
		Format::Text => HttpResponse::Ok().content_type(ContentType::plaintext()).body(result.join("\n\n")),
		Format::Html => {
			let html = result.iter().map(|p| format!("<p>{p}</p>")).collect::<Vec<_>>().join("\n");
			HttpResponse::Ok().content_type(ContentType::html()).body(html)
		}
		Format::Json => HttpResponse::Ok().json(GenerateResponse {
			success: true,
			options: RequestedOptions { paragraphs, curse_level },
			data: Generated::new(result),
		}),
	}
}

#[get("/generate/paragraph")]
async fn get_paragraph(data: web::Data<SharedData>, query: web::Query<LevelParams>) -> impl Responder {
	match parse_curse_level(query.curse_level.as_deref()) {
		Ok(level) => {
			let paragraph = data.generator.generate_paragraph(&GenerateOptions::with_curse_level(level), &mut rand::rng());
			HttpResponse::Ok().json(json!({ "success": true, "data": paragraph }))
		}
		Err(e) => error_response(&e),
	}
}

#[get("/generate/sentence")]
async fn get_sentence(data: web::Data<SharedData>, query: web::Query<LevelParams>) -> impl Responder {
	match parse_curse_level(query.curse_level.as_deref()) {
		Ok(level) => {
			let sentence = data.generator.generate_sentence(&GenerateOptions::with_curse_level(level), &mut rand::rng());
			HttpResponse::Ok().json(json!({ "success": true, "data": sentence }))
		}
		Err(e) => error_response(&e),
	}
}

/// HTTP POST endpoint `/api/generate`
///
/// Unlike the GET endpoint, out-of-range paragraph counts are clamped
/// instead of rejected. The effective options are echoed back.
#[post("/generate")]
async fn post_generated(data: web::Data<SharedData>, body: web::Json<GenerateBody>) -> impl Responder {
	let options = body.options();
	let result = data.generator.generate_ipsum(&options, &mut rand::rng());

	HttpResponse::Ok().json(GenerateResponse { success: true, options, data: Generated::new(result) })
}

/// Registers every endpoint under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::scope("/api")
			.app_data(json_config())
			.service(get_health)
			.service(get_words)
			.service(get_category)
			.service(get_generated)
			.service(get_paragraph)
			.service(get_sentence)
			.service(post_generated),
	);
}
