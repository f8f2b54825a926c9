use chrono::Month;

/// Carriers offered when `/api/carriers` cannot be used.
pub const FALLBACK_CARRIERS: [&str; 10] = ["AA", "DL", "UA", "WN", "AS", "B6", "NK", "F9", "G4", "YX"];

/// Airports offered when `/api/airports` cannot be used.
pub const FALLBACK_AIRPORTS: [&str; 10] = [
    "ATL", "LAX", "ORD", "DFW", "DEN", "JFK", "SFO", "SEA", "LAS", "MCO",
];

/// Entry of the month select: `value` is what the form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub value: String,
    pub label: &'static str,
}

pub fn month_options() -> Vec<MonthOption> {
    (1u8..=12)
        .filter_map(|number| Month::try_from(number).ok().map(|month| (number, month)))
        .map(|(number, month)| MonthOption {
            value: number.to_string(),
            label: month.name(),
        })
        .collect()
}

pub(crate) fn fallback(list: &[&str]) -> Vec<String> {
    list.iter().map(|code| code.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_options() {
        let options = month_options();

        assert_eq!(options.len(), 12);
        assert_eq!(options[0], MonthOption { value: "1".to_string(), label: "January" });
        assert_eq!(options[11].label, "December");
    }

    #[test]
    fn test_fallback_lists_are_full() {
        assert_eq!(fallback(&FALLBACK_CARRIERS).len(), 10);
        assert_eq!(fallback(&FALLBACK_AIRPORTS)[0], "ATL");
    }
}
