use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexquiz::{bank, config, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lexquiz=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let mut questions = bank::seed::seed_questions();
  let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
  let target = config::load_target_bank_size();
  let extra = bank::generator::generate_extra_questions(next_id, target);
  tracing::info!(
    "generated {} filler questions toward a bank of {}",
    extra.len(),
    target
  );
  questions.extend(extra);

  let bank = bank::QuestionBank::new(questions).expect("Failed to build question bank");
  tracing::info!("question bank ready with {} questions", bank.len());

  let app = lexquiz::router(AppState::new(bank));

  let bind_addr = config::load_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://{}", bind_addr);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
