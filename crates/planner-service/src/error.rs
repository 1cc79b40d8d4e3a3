use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] planner_db::error::DbError),

    #[error(transparent)]
    RuleError(#[from] planner_rule::NextDateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),
}

impl From<planner_rule::ComputationError> for ServiceError {
    fn from(error: planner_rule::ComputationError) -> Self {
        Self::RuleError(error.into())
    }
}

impl From<planner_rule::ParseError> for ServiceError {
    fn from(error: planner_rule::ParseError) -> Self {
        Self::RuleError(error.into())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
