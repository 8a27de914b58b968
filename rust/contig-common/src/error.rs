use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_bounds_carries_index_and_len() {
        let err = Error::index_out_of_bounds(5, 3);
        match err.kind() {
            ErrorKind::IndexOutOfBounds { index, len } => {
                assert_eq!(*index, 5);
                assert_eq!(*len, 3);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(err.to_string(), "index 5 out of bounds for length 3");
    }

    #[test]
    fn into_kind_unboxes() {
        let err = Error::invalid_arg("capacity", "must be non-zero");
        match err.into_kind() {
            ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "capacity"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
