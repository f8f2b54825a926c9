use thiserror::Error;

/// A form value that blocks submission. The message is shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a carrier")]
    MissingCarrier,
    #[error("Please select an airport")]
    MissingAirport,
    #[error("Please select a month")]
    MissingMonth,
    #[error("Please enter the number of arriving flights")]
    MissingArrivingFlights,
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Arriving flights must be greater than 0")]
    ArrivingFlightsNotPositive,
    #[error("Arriving flights must be at most {}", u32::MAX)]
    ArrivingFlightsTooLarge,
    #[error("{0} must be between 1 and 5")]
    SeverityOutOfRange(&'static str),
    /// A rule failure with no dedicated message, shown as the validator reports it.
    #[error("{0}")]
    Rejected(String),
}

/// Everything that can go wrong between pressing "Predict" and showing a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("{0}")]
    Remote(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// Text shown to the user.
    ///
    /// Validation and service messages are passed through verbatim; transport
    /// and decoding problems collapse into one generic banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(err) => err.to_string(),
            ClientError::Remote(message) => message.clone(),
            ClientError::Transport(_) => {
                "Could not reach the prediction service. Please try again.".to_string()
            }
            ClientError::Http(status) => {
                format!("The prediction service answered with HTTP {status}. Please try again.")
            }
            ClientError::Malformed(_) => {
                "The prediction service sent an unexpected response. Please try again.".to_string()
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_message_names_field() {
        let err = ValidationError::SeverityOutOfRange("NAS severity");
        assert_eq!(err.to_string(), "NAS severity must be between 1 and 5");
    }

    #[test]
    fn test_user_message_passes_remote_error_verbatim() {
        let err = ClientError::Remote("could not convert string to float: 'abc'".to_string());
        assert_eq!(err.user_message(), "could not convert string to float: 'abc'");
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = ClientError::Transport("dns error: no such host".to_string());
        assert!(!err.user_message().contains("dns"));
        assert!(!err.is_validation());
    }
}
