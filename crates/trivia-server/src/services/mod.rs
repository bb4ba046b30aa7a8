//! Business logic services

pub mod question_bank;
pub mod quiz_master;

pub use question_bank::{
    CategoryPage, CategoryQuestions, QuestionBank, QuestionListing, QuestionPage,
};
pub use quiz_master::QuizMaster;
