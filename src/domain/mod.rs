pub mod question;
pub mod session;

pub use question::{Area, QuestionRecord, AREAS};
pub use session::{AnswerRecord, LastFeedback, QuizSession};
