//! Request handlers. Thin shells over the quiz engine: read the visitor's
//! state, run one transition, write the state back, redirect or render.

pub mod quiz;

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config;
use crate::session;
use crate::state::AppState;

pub use quiz::{answer, question, reset, result, review, start_quiz};

pub struct AreaCount {
  pub name: &'static str,
  pub count: usize,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub app_name: &'static str,
  pub notice: Option<String>,
  pub areas: Vec<AreaCount>,
  pub total: usize,
}

/// Resolve the visitor's session id from the cookie jar, minting a new id
/// (and cookie) for first-time visitors.
pub(crate) fn visitor_session(jar: CookieJar) -> (CookieJar, String) {
  if let Some(cookie) = jar.get(config::SESSION_COOKIE_NAME) {
    let id = cookie.value().to_string();
    (jar, id)
  } else {
    let id = session::generate_session_id();
    let cookie = Cookie::build((config::SESSION_COOKIE_NAME, id.clone()))
      .path("/")
      .http_only(true)
      .max_age(time::Duration::hours(config::SESSION_EXPIRY_HOURS))
      .build();
    (jar.add(cookie), id)
  }
}

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);

  // The notice slot is one-shot: consume it on render
  let mut visitor = session::get_state(&session_id);
  let notice = visitor.notice.take();
  if notice.is_some() {
    session::update_state(&session_id, visitor);
  }

  let areas = state
    .bank
    .area_counts()
    .into_iter()
    .map(|(area, count)| AreaCount {
      name: area.as_str(),
      count,
    })
    .collect();

  let template = IndexTemplate {
    app_name: config::APP_NAME,
    notice,
    areas,
    total: state.bank.len(),
  };
  (jar, Html(template.render().unwrap_or_default()))
}
