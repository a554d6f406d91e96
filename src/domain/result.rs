//! Result type alias for the exporter

use super::errors::ExportError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use entropy_export::domain::result::Result;
/// use entropy_export::domain::errors::ExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::Decode("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<u64> {
            Ok(440)
        }

        let value = inner()?;
        assert_eq!(value, 440);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<u64> = Err(ExportError::Decode("test error".to_string()));
        assert!(result.is_err());
    }
}
