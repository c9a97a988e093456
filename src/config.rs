//! Application configuration constants.
//!
//! Centralizes every tunable value; the bind address and the generator's
//! target bank size can also come from config.toml or the environment.

use serde::Deserialize;

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    server: Option<ServerConfig>,
    bank: Option<BankConfig>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BankConfig {
    target_size: Option<usize>,
}

fn load_app_config() -> Option<AppConfig> {
    let contents = std::fs::read_to_string("config.toml").ok()?;
    toml::from_str(&contents).ok()
}

/// Load the bind address with priority: config.toml > .env > default
pub fn load_bind_addr() -> String {
    let _ = dotenvy::dotenv();

    if let Some(config) = load_app_config() {
        if let Some(addr) = config.server.and_then(|s| s.address) {
            tracing::info!("Using bind address from config.toml: {}", addr);
            return addr;
        }
    }

    if let Ok(addr) = std::env::var("BIND_ADDR") {
        tracing::info!("Using bind address from BIND_ADDR env: {}", addr);
        return addr;
    }

    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

/// Load the generator's target bank size with the same priority chain
pub fn load_target_bank_size() -> usize {
    let _ = dotenvy::dotenv();

    if let Some(config) = load_app_config() {
        if let Some(size) = config.bank.and_then(|b| b.target_size) {
            tracing::info!("Using target bank size from config.toml: {}", size);
            return size;
        }
    }

    if let Ok(raw) = std::env::var("TARGET_BANK_SIZE") {
        if let Ok(size) = raw.parse() {
            tracing::info!("Using target bank size from TARGET_BANK_SIZE env: {}", size);
            return size;
        }
    }

    DEFAULT_TARGET_BANK_SIZE
}

// ==================== Presentation ====================

/// Application display name
pub const APP_NAME: &str = "LexQuiz";

// ==================== Session Configuration ====================

/// Cookie carrying the visitor's session id
pub const SESSION_COOKIE_NAME: &str = "quiz_session";

/// Visitor state expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 4;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== Quiz Configuration ====================

/// Practice mode: immediate feedback after each answer
pub const MODE_PRACTICE: &str = "practice";

/// Timed mode: deferred feedback, per-question countdown hint
pub const MODE_TIMED: &str = "timed";

/// Mode used when the start form leaves it blank
pub const DEFAULT_MODE: &str = MODE_PRACTICE;

/// Smallest quiz a visitor can request
pub const MIN_QUIZ_SIZE: usize = 5;

/// Largest quiz a visitor can request
pub const MAX_QUIZ_SIZE: usize = 20;

/// Quiz size used when the requested value is missing or malformed
pub const DEFAULT_QUIZ_SIZE: usize = 10;

/// Seconds per question shown as a countdown in timed mode. Presentation
/// only: nothing terminates a session server-side.
pub const TIMED_SECONDS_PER_QUESTION: u32 = 20;

/// Area label of a review-of-mistakes session
pub const REVIEW_AREA_LABEL: &str = "Review of Mistakes";

/// A review session replays at most this many missed questions
pub const REVIEW_CAP: usize = 20;

// ==================== Generator Configuration ====================

/// Bank size the startup generator pads the seed data up to
pub const DEFAULT_TARGET_BANK_SIZE: usize = 120;

/// Safety net on generated ids; generation stops past
/// `start_id + GENERATOR_ID_CEILING` even if the target was not reached
pub const GENERATOR_ID_CEILING: u32 = 100_000;
