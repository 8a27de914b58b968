pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_bounds(index, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_bounds(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::IndexOutOfBounds { index, len }.into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn checked(value: usize) -> crate::Result<usize> {
        verify_arg!(value, value % 2 == 0);
        Ok(value / 2)
    }

    #[test]
    fn verify_arg_passes_and_fails() {
        assert_eq!(checked(4).unwrap(), 2);
        let err = checked(3).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "value");
                assert_eq!(message, "value % 2 == 0");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn check_index_boundary() {
        assert!(super::check_index(0, 1).is_ok());
        assert!(super::check_index(1, 1).is_err());
        assert!(super::check_index(0, 0).is_err());
    }
}
