use deploy_help::cli::output::OutputError;
use deploy_help::{HelpError, HelpResult};

/// Error handling tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            HelpError::config("bad layout"),
            HelpError::Output("stdout closed".to_string()),
            HelpError::Logging("already initialized".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty(), "Error display should not be empty");
        }

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HelpError>();
    }

    #[test]
    fn test_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let help_error: HelpError = io_error.into();
        assert!(matches!(help_error, HelpError::Io(_)));

        let output_error = OutputError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let help_error: HelpError = output_error.into();
        assert!(matches!(help_error, HelpError::Output(ref message) if message.contains("boom")));
    }

    #[test]
    fn test_result_type() {
        fn error_function() -> HelpResult<String> {
            Err(HelpError::config("Test error"))
        }

        let error = error_function().unwrap_err();
        assert_eq!(error.to_string(), "Configuration error: Test error");
    }
}
