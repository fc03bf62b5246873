//! Question-bank use-case service.
//!
//! Storage failures degrade as elsewhere, with one exception: an unknown
//! subject is a caller mistake and propagates as an explicit error
//! instead of masquerading as an empty question bank.

use crate::model::question::{Question, QuestionId};
use crate::repo::question_repo::QuestionRepository;
use crate::repo::RepoError;
use crate::service::degrade;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for question use-cases.
#[derive(Debug)]
pub enum QuestionServiceError {
    /// The requested subject is not registered.
    InvalidSubject(String),
}

impl Display for QuestionServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSubject(subject) => write!(f, "unknown subject: {subject}"),
        }
    }
}

impl Error for QuestionServiceError {}

/// Use-case service wrapper for question-bank lookups.
pub struct QuestionService<R: QuestionRepository> {
    repo: R,
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up one question with its choices.
    pub fn get_question(
        &self,
        subject: &str,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionServiceError> {
        match self.repo.get_question(subject, id) {
            Ok(question) => Ok(question),
            Err(RepoError::InvalidSubject(subject)) => {
                Err(QuestionServiceError::InvalidSubject(subject))
            }
            Err(err) => {
                error!(
                    "event=question_get module=service status=error error={}",
                    err
                );
                Ok(None)
            }
        }
    }

    /// Lists a subject's single-answer or multi-answer questions.
    pub fn get_all_subject_questions(
        &self,
        subject: &str,
        multi_answer: bool,
    ) -> Result<Vec<Question>, QuestionServiceError> {
        match self.repo.get_all_subject_questions(subject, multi_answer) {
            Ok(questions) => Ok(questions),
            Err(RepoError::InvalidSubject(subject)) => {
                Err(QuestionServiceError::InvalidSubject(subject))
            }
            Err(err) => {
                error!(
                    "event=question_get_all module=service status=error error={}",
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Lists elective or mandatory subject names; failures degrade to an
    /// empty list.
    pub fn get_subject_names(&self, elective: bool) -> Vec<String> {
        degrade(
            "question_get_subject_names",
            self.repo.get_subject_names(elective),
            Vec::new(),
        )
    }
}
