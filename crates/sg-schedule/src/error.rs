use sg_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{0} is already registered with the scheduler")]
    DuplicateAgent(AgentId),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
