//! The quiz flow: start, question, answer, result, review, reset.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;

use axum_extra::extract::cookie::CookieJar;

use super::visitor_session;
use crate::config;
use crate::domain::{Area, LastFeedback};
use crate::quiz::{self, AreaScore};
use crate::session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartForm {
  pub area: String,
  #[serde(default)]
  pub mode: String,
  /// Kept as raw text so malformed input can be coerced, never rejected.
  #[serde(default)]
  pub n: String,
}

#[derive(Deserialize)]
pub struct AnswerForm {
  #[serde(default)]
  pub choice: String,
}

#[derive(Template)]
#[template(path = "question.html")]
pub struct QuestionTemplate {
  pub app_name: &'static str,
  pub area: String,
  /// 1-based position of the question on display.
  pub number: usize,
  pub size: usize,
  pub score: usize,
  pub prompt: String,
  pub options: Vec<String>,
  /// Countdown hint, timed mode only.
  pub time_limit: Option<u32>,
  /// Feedback for the previous answer, practice mode only.
  pub feedback: Option<LastFeedback>,
}

pub struct DetailRow {
  pub number: usize,
  pub area: String,
  pub prompt: String,
  pub chosen_text: String,
  pub correct_text: String,
  pub was_correct: bool,
  pub explanation: String,
  pub difficulty: Option<String>,
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
  pub app_name: &'static str,
  pub area: String,
  pub score: usize,
  pub size: usize,
  pub details: Vec<DetailRow>,
  pub per_area: Vec<AreaScore>,
  pub can_review: bool,
}

fn option_text(options: &[String], index: i32) -> String {
  usize::try_from(index)
    .ok()
    .and_then(|i| options.get(i))
    .cloned()
    .unwrap_or_else(|| "—".to_string())
}

/// POST /start - Sample a fresh quiz for the chosen area
pub async fn start_quiz(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<StartForm>,
) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);
  let mut visitor = session::get_state(&session_id);

  let area = form.area.trim().to_string();
  if Area::from_str(&area).is_none() {
    visitor.notice = Some("Choose a valid area.".to_string());
    session::update_state(&session_id, visitor);
    return (jar, Redirect::to("/")).into_response();
  }

  // Malformed sizes fall back to the default, then clamp to the sane range
  let size = form
    .n
    .trim()
    .parse::<usize>()
    .unwrap_or(config::DEFAULT_QUIZ_SIZE)
    .clamp(config::MIN_QUIZ_SIZE, config::MAX_QUIZ_SIZE);
  let mode = if form.mode.trim().is_empty() {
    config::DEFAULT_MODE.to_string()
  } else {
    form.mode
  };

  let quiz = quiz::build_quiz(&state.bank, &area, &mode, size);
  if quiz.items.is_empty() {
    visitor.notice = Some(format!("No questions registered for {} yet.", area));
    session::update_state(&session_id, visitor);
    return (jar, Redirect::to("/")).into_response();
  }

  tracing::info!(
    "starting {} quiz on {} with {} questions",
    quiz.mode,
    quiz.area,
    quiz.size
  );
  visitor.quiz = Some(quiz);
  visitor.last_feedback = None;
  session::update_state(&session_id, visitor);
  (jar, Redirect::to("/q")).into_response()
}

/// GET /q - Show the question at the session cursor
pub async fn question(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);
  let mut visitor = session::get_state(&session_id);

  let Some(quiz) = visitor.quiz.clone() else {
    return (jar, Redirect::to("/")).into_response();
  };
  if quiz.is_finished() {
    return (jar, Redirect::to("/result")).into_response();
  }

  let record = quiz
    .current_question_id()
    .and_then(|id| state.bank.find_by_id(id));
  let Some(record) = record else {
    tracing::warn!("discarding session with an unresolvable question id");
    visitor.quiz = None;
    visitor.last_feedback = None;
    visitor.notice = Some("Could not load the next question; the quiz was discarded.".to_string());
    session::update_state(&session_id, visitor);
    return (jar, Redirect::to("/")).into_response();
  };

  let time_limit =
    (quiz.mode == config::MODE_TIMED).then_some(config::TIMED_SECONDS_PER_QUESTION);
  let feedback = if quiz.mode == config::MODE_PRACTICE {
    visitor.last_feedback.clone()
  } else {
    None
  };

  let template = QuestionTemplate {
    app_name: config::APP_NAME,
    area: quiz.area.clone(),
    number: quiz.position + 1,
    size: quiz.size,
    score: quiz.score,
    prompt: record.prompt.clone(),
    options: record.options.clone(),
    time_limit,
    feedback,
  };
  (jar, Html(template.render().unwrap_or_default())).into_response()
}

/// POST /answer - Record the submitted choice and advance the session
pub async fn answer(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<AnswerForm>,
) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);
  let mut visitor = session::get_state(&session_id);

  let Some(mut quiz) = visitor.quiz.take() else {
    visitor.notice = Some("Your session expired. Start a new quiz.".to_string());
    session::update_state(&session_id, visitor);
    return (jar, Redirect::to("/")).into_response();
  };

  // Missing or non-numeric input scores as wrong, never as an error
  let chosen = form.choice.trim().parse::<i32>().unwrap_or(-1);

  match quiz::record_answer(&state.bank, &mut quiz, chosen) {
    Ok(Some(feedback)) => {
      visitor.last_feedback = if quiz.mode == config::MODE_PRACTICE {
        Some(feedback)
      } else {
        None
      };
      visitor.quiz = Some(quiz);
      session::update_state(&session_id, visitor);
      (jar, Redirect::to("/q")).into_response()
    }
    Ok(None) => {
      // Already terminal; keep the session for the result view
      visitor.quiz = Some(quiz);
      session::update_state(&session_id, visitor);
      (jar, Redirect::to("/result")).into_response()
    }
    Err(err) => {
      tracing::warn!("discarding session: {}", err);
      visitor.last_feedback = None;
      visitor.notice = Some("This quiz is no longer valid; it was discarded.".to_string());
      session::update_state(&session_id, visitor);
      (jar, Redirect::to("/")).into_response()
    }
  }
}

/// GET /result - Score breakdown for the visitor's session
pub async fn result(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);
  let mut visitor = session::get_state(&session_id);

  let Some(quiz) = visitor.quiz.clone() else {
    return (jar, Redirect::to("/")).into_response();
  };

  let summary = quiz::build_result(&state.bank, &quiz);
  visitor.wrong_ids = summary.wrong_ids.clone();
  visitor.last_per_area = summary.per_area.clone();
  session::update_state(&session_id, visitor);

  let details = summary
    .details
    .iter()
    .enumerate()
    .map(|(i, d)| DetailRow {
      number: i + 1,
      area: d.area.clone(),
      prompt: d.prompt.clone(),
      chosen_text: option_text(&d.options, d.chosen),
      correct_text: option_text(&d.options, d.correct),
      was_correct: d.was_correct,
      explanation: d.explanation.clone(),
      difficulty: d.difficulty.clone(),
    })
    .collect();

  let template = ResultTemplate {
    app_name: config::APP_NAME,
    area: quiz.area.clone(),
    score: quiz.score,
    size: quiz.size,
    details,
    per_area: summary.per_area,
    can_review: !summary.wrong_ids.is_empty(),
  };
  (jar, Html(template.render().unwrap_or_default())).into_response()
}

/// GET /review - Replay the most recent mistakes as a practice session
pub async fn review(jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);
  let mut visitor = session::get_state(&session_id);

  match quiz::build_review(&visitor.wrong_ids) {
    Ok(review) => {
      tracing::info!("starting review of {} mistakes", review.size);
      visitor.quiz = Some(review);
      visitor.last_feedback = None;
      session::update_state(&session_id, visitor);
      (jar, Redirect::to("/q")).into_response()
    }
    Err(err) => {
      tracing::debug!("review rejected: {}", err);
      visitor.notice = Some("You have no mistakes to review yet.".to_string());
      session::update_state(&session_id, visitor);
      (jar, Redirect::to("/")).into_response()
    }
  }
}

/// GET /reset - Drop every session-scoped slot for this visitor
pub async fn reset(jar: CookieJar) -> impl IntoResponse {
  let (jar, session_id) = visitor_session(jar);
  session::clear_state(&session_id);
  (jar, Redirect::to("/"))
}
