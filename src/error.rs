use std::{error, fmt};

/// A mapping couldn't be turned into an [Attachment][crate::Attachment] (or one
/// of its actions) because it lacked a required key or carried a value of the
/// wrong shape.
#[derive(Debug)]
pub struct ValidationError(pub serde_json::Error);

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError(e)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid attachment: {}", self.0)
    }
}

impl error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Sum type representing every way a send can fail. `E` is the error type of
/// the [Transport][crate::Transport] in use, passed through untouched.
#[derive(Debug)]
pub enum SendError<E> {
    Encode(serde_json::Error),
    Transport(E),
}

impl<E: fmt::Display> fmt::Display for SendError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            SendError::Encode(e) => format!("Failed to encode payload: {}", e),
            SendError::Transport(e) => format!("Webhook request failed: {}", e),
        };

        write!(f, "{}", x)
    }
}

impl<E> error::Error for SendError<E>
where
    E: error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SendError::Encode(e) => Some(e),
            SendError::Transport(e) => Some(e),
        }
    }
}
