use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("answer {value} is outside the scale [{min}, {max}]")]
    InvalidAnswerRange { value: u8, min: u8, max: u8 },
}
