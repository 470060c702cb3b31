#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("recipe id `{0}` already exists in the catalog")]
    DuplicateId(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId(_))
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::InvalidInput(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::InvalidInput(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::InvalidInput(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(value: i32) -> Result<i32> {
        if value < 0 {
            crate::bail!("value must be non-negative, got {}", value);
        }

        Ok(value)
    }

    #[test]
    fn bail_produces_invalid_input() {
        let err = reject(-3).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "invalid input: value must be non-negative, got -3");
        assert_eq!(reject(2).unwrap(), 2);
    }

    #[test]
    fn duplicate_id_display() {
        let err = Error::DuplicateId("7".to_owned());
        assert!(err.is_duplicate_id());
        assert!(err.to_string().contains("`7`"));
    }
}
