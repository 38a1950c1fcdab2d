use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("Malformed rate: {0:?}")]
    MalformedRate(String),
}
