use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Unknown date window '{0}', expected one of: all, 7, 30")]
    UnknownWindow(String)
}
