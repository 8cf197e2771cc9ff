mod question;
mod result;
mod session;

pub use question::{Question, QuestionBank, Subject};
pub use result::{QuizResult, QuizStats, SubjectStats};
pub use session::{QuizSession, UserAnswer};
