use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::ValidationError;

/// Field rules in the order the fields appear on screen, with the message a
/// violation of each produces. The first failing field wins.
const FIELD_RULES: [(&str, ValidationError); 7] = [
    ("carrier", ValidationError::MissingCarrier),
    ("airport", ValidationError::MissingAirport),
    ("month", ValidationError::MonthOutOfRange),
    ("arr_flights", ValidationError::ArrivingFlightsNotPositive),
    ("weather_severity", ValidationError::SeverityOutOfRange("Weather severity")),
    ("nas_severity", ValidationError::SeverityOutOfRange("NAS severity")),
    ("equipment_issues", ValidationError::SeverityOutOfRange("Equipment issues")),
];

/// Raw values as the user edits them, before anything is checked.
///
/// Selects and the number input hold strings (empty means nothing chosen yet);
/// the severity sliders always hold a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub carrier: String,
    pub airport: String,
    pub month: String,
    pub arr_flights: String,
    pub weather_severity: u8,
    pub nas_severity: u8,
    pub equipment_issues: u8,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            carrier: String::new(),
            airport: String::new(),
            month: String::new(),
            arr_flights: String::new(),
            weather_severity: 1,
            nas_severity: 1,
            equipment_issues: 1,
        }
    }
}

impl PredictionForm {
    /// Turns the form into a request, or reports the first field that blocks
    /// submission. Missing fields are reported before out-of-range ones.
    pub fn validate(&self) -> Result<PredictionRequest, ValidationError> {
        let carrier = self.carrier.trim();
        let airport = self.airport.trim();
        let month = self.month.trim();
        let arr_flights = self.arr_flights.trim();

        if carrier.is_empty() {
            return Err(ValidationError::MissingCarrier);
        }
        if airport.is_empty() {
            return Err(ValidationError::MissingAirport);
        }
        if month.is_empty() {
            return Err(ValidationError::MissingMonth);
        }
        if arr_flights.is_empty() {
            return Err(ValidationError::MissingArrivingFlights);
        }

        let month = month
            .parse::<u8>()
            .map_err(|_| ValidationError::MonthOutOfRange)?;
        let arr_flights = arr_flights
            .parse::<u64>()
            .map_err(|_| ValidationError::ArrivingFlightsNotPositive)?;
        let arr_flights =
            u32::try_from(arr_flights).map_err(|_| ValidationError::ArrivingFlightsTooLarge)?;

        let request = PredictionRequest {
            carrier: carrier.to_string(),
            airport: airport.to_string(),
            month,
            arr_flights,
            weather_severity: self.weather_severity,
            nas_severity: self.nas_severity,
            equipment_issues: self.equipment_issues,
        };
        request.check()?;

        Ok(request)
    }
}

/// Body of `POST /api/predict`. Only ever sent once every field is in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(length(min = 1))]
    pub carrier: String,
    #[validate(length(min = 1))]
    pub airport: String,
    #[validate(range(min = 1, max = 12))]
    pub month: u8,
    #[validate(range(min = 1))]
    pub arr_flights: u32,
    #[validate(range(min = 1, max = 5))]
    pub weather_severity: u8,
    #[validate(range(min = 1, max = 5))]
    pub nas_severity: u8,
    #[validate(range(min = 1, max = 5))]
    pub equipment_issues: u8,
}

impl PredictionRequest {
    /// Runs the field rules and maps the first violation to its user message.
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let fields = errors.field_errors();
        let violation = FIELD_RULES
            .iter()
            .find(|(field, _)| fields.contains_key(*field))
            .map(|(_, violation)| violation.clone())
            .unwrap_or_else(|| ValidationError::Rejected(errors.to_string()));

        tracing::debug!("Prediction request rejected: {}", violation);
        Err(violation)
    }
}

/// Delay estimate produced by the remote model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub total_delay_minutes: f64,
    pub average_delay_per_flight: f64,
    pub delay_category: DelayCategory,
}

impl PredictionResult {
    pub fn total_minutes_rounded(&self) -> i64 {
        self.total_delay_minutes.round() as i64
    }

    pub fn average_minutes_rounded(&self) -> i64 {
        self.average_delay_per_flight.round() as i64
    }
}

/// Coarse label the service assigns to a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DelayCategory {
    Minimal,
    Low,
    Moderate,
    High,
    Severe,
    /// A label this client does not know yet; shown as-is in a neutral tone.
    Other(String),
}

impl DelayCategory {
    pub fn label(&self) -> &str {
        match self {
            DelayCategory::Minimal => "Minimal Delay",
            DelayCategory::Low => "Low Delay",
            DelayCategory::Moderate => "Moderate Delay",
            DelayCategory::High => "High Delay",
            DelayCategory::Severe => "Severe Delay",
            DelayCategory::Other(label) => label,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            DelayCategory::Minimal => Tone::Green,
            DelayCategory::Low => Tone::Yellow,
            DelayCategory::Moderate => Tone::Orange,
            DelayCategory::High => Tone::Red,
            DelayCategory::Severe => Tone::DarkRed,
            DelayCategory::Other(_) => Tone::Slate,
        }
    }
}

impl From<String> for DelayCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Minimal Delay" => DelayCategory::Minimal,
            "Low Delay" => DelayCategory::Low,
            "Moderate Delay" => DelayCategory::Moderate,
            "High Delay" => DelayCategory::High,
            "Severe Delay" => DelayCategory::Severe,
            _ => DelayCategory::Other(label),
        }
    }
}

impl From<DelayCategory> for String {
    fn from(category: DelayCategory) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for DelayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour family used to badge a delay category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Orange,
    Red,
    DarkRed,
    Slate,
}

impl Tone {
    /// Tailwind text class for the web badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Green => "text-green-400",
            Tone::Yellow => "text-yellow-400",
            Tone::Orange => "text-orange-400",
            Tone::Red => "text-red-400",
            Tone::DarkRed => "text-red-600",
            Tone::Slate => "text-slate-400",
        }
    }

    /// SGR parameters for the terminal badge.
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Tone::Green => "32",
            Tone::Yellow => "33",
            Tone::Orange => "38;5;208",
            Tone::Red => "31",
            Tone::DarkRed => "38;5;124",
            Tone::Slate => "90",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PredictionForm {
        PredictionForm {
            carrier: "AA".to_string(),
            airport: "ATL".to_string(),
            month: "7".to_string(),
            arr_flights: "150".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_form_sliders_start_at_one() {
        let form = PredictionForm::default();
        assert_eq!(form.weather_severity, 1);
        assert_eq!(form.nas_severity, 1);
        assert_eq!(form.equipment_issues, 1);
        assert_eq!(form.validate(), Err(ValidationError::MissingCarrier));
    }

    #[test]
    fn test_valid_form_becomes_request() {
        let request = filled_form().validate().expect("form should be valid");

        assert_eq!(request.carrier, "AA");
        assert_eq!(request.airport, "ATL");
        assert_eq!(request.month, 7);
        assert_eq!(request.arr_flights, 150);
        assert_eq!(request.weather_severity, 1);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let cases = [
            (PredictionForm { carrier: String::new(), ..filled_form() }, ValidationError::MissingCarrier),
            (PredictionForm { airport: "  ".to_string(), ..filled_form() }, ValidationError::MissingAirport),
            (PredictionForm { month: String::new(), ..filled_form() }, ValidationError::MissingMonth),
            (
                PredictionForm { arr_flights: String::new(), ..filled_form() },
                ValidationError::MissingArrivingFlights,
            ),
        ];

        for (form, expected) in cases {
            assert_eq!(form.validate(), Err(expected));
        }
    }

    #[test]
    fn test_missing_field_reported_before_range_error() {
        let form = PredictionForm {
            airport: String::new(),
            month: "13".to_string(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingAirport));
    }

    #[test]
    fn test_month_out_of_range() {
        for month in ["0", "13", "-1", "june"] {
            let form = PredictionForm { month: month.to_string(), ..filled_form() };
            assert_eq!(form.validate(), Err(ValidationError::MonthOutOfRange), "month {month}");
        }
        for month in ["1", "12"] {
            let form = PredictionForm { month: month.to_string(), ..filled_form() };
            assert!(form.validate().is_ok(), "month {month}");
        }
    }

    #[test]
    fn test_arriving_flights_must_be_positive() {
        for flights in ["0", "-3", "1.5"] {
            let form = PredictionForm { arr_flights: flights.to_string(), ..filled_form() };
            assert_eq!(
                form.validate(),
                Err(ValidationError::ArrivingFlightsNotPositive),
                "arr_flights {flights}"
            );
        }
    }

    #[test]
    fn test_arriving_flights_beyond_u32_have_own_message() {
        let form = PredictionForm { arr_flights: "5000000000".to_string(), ..filled_form() };

        assert_eq!(form.validate(), Err(ValidationError::ArrivingFlightsTooLarge));
        assert_eq!(
            ValidationError::ArrivingFlightsTooLarge.to_string(),
            "Arriving flights must be at most 4294967295"
        );

        let form = PredictionForm { arr_flights: u32::MAX.to_string(), ..filled_form() };
        assert_eq!(form.validate().unwrap().arr_flights, u32::MAX);
    }

    #[test]
    fn test_every_request_field_maps_to_its_message() {
        let valid = filled_form().validate().unwrap();
        let cases = [
            (PredictionRequest { carrier: String::new(), ..valid.clone() }, ValidationError::MissingCarrier),
            (PredictionRequest { airport: String::new(), ..valid.clone() }, ValidationError::MissingAirport),
            (PredictionRequest { month: 0, ..valid.clone() }, ValidationError::MonthOutOfRange),
            (PredictionRequest { arr_flights: 0, ..valid.clone() }, ValidationError::ArrivingFlightsNotPositive),
            (
                PredictionRequest { weather_severity: 6, ..valid.clone() },
                ValidationError::SeverityOutOfRange("Weather severity"),
            ),
            (
                PredictionRequest { nas_severity: 0, ..valid.clone() },
                ValidationError::SeverityOutOfRange("NAS severity"),
            ),
            (
                PredictionRequest { equipment_issues: 7, ..valid.clone() },
                ValidationError::SeverityOutOfRange("Equipment issues"),
            ),
        ];

        for (request, expected) in cases {
            assert_eq!(request.check(), Err(expected));
        }
        assert_eq!(valid.check(), Ok(()));
    }

    #[test]
    fn test_severity_out_of_range() {
        let form = PredictionForm { nas_severity: 6, ..filled_form() };
        assert_eq!(
            form.validate(),
            Err(ValidationError::SeverityOutOfRange("NAS severity"))
        );

        let form = PredictionForm { weather_severity: 0, equipment_issues: 9, ..filled_form() };
        assert_eq!(
            form.validate(),
            Err(ValidationError::SeverityOutOfRange("Weather severity"))
        );
    }

    #[test]
    fn test_request_serializes_flat_integers() {
        let request = filled_form().validate().unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "carrier": "AA",
                "airport": "ATL",
                "month": 7,
                "arr_flights": 150,
                "weather_severity": 1,
                "nas_severity": 1,
                "equipment_issues": 1,
            })
        );
    }

    #[test]
    fn test_result_rounding_and_tone() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"total_delay_minutes": 42.3, "average_delay_per_flight": 10.1, "delay_category": "Moderate Delay"}"#,
        )
        .unwrap();

        assert_eq!(result.total_minutes_rounded(), 42);
        assert_eq!(result.average_minutes_rounded(), 10);
        assert_eq!(result.delay_category, DelayCategory::Moderate);
        assert_eq!(result.delay_category.label(), "Moderate Delay");
        assert_eq!(result.delay_category.tone().css_class(), "text-orange-400");
    }

    #[test]
    fn test_unknown_category_keeps_label() {
        let category = DelayCategory::from("Extreme Delay".to_string());

        assert_eq!(category.label(), "Extreme Delay");
        assert_eq!(category.tone(), Tone::Slate);
        assert_eq!(String::from(category), "Extreme Delay");
    }

    #[test]
    fn test_category_tones() {
        assert_eq!(DelayCategory::Minimal.tone().css_class(), "text-green-400");
        assert_eq!(DelayCategory::Low.tone().css_class(), "text-yellow-400");
        assert_eq!(DelayCategory::High.tone().css_class(), "text-red-400");
        assert_eq!(DelayCategory::Severe.tone().css_class(), "text-red-600");
    }
}
