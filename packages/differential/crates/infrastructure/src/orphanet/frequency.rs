use super::IngestError;
use domain::Interval;

/// Frequency class of an HPO association as Orphanet spells it, e.g.
/// `"Very frequent (99-80%)"`, `"Obligate (100%)"` or `"Very rare (<4-1%)"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Frequency {
    /// The symptom is known to be absent; such associations are dropped.
    Excluded,
    Observed {
        description: String,
        range: Interval,
    },
}

pub fn parse_frequency(text: &str) -> Result<Frequency, IngestError> {
    let (description, rest) = text
        .split_once('(')
        .ok_or_else(|| IngestError::InvalidFrequency(text.to_string()))?;
    let description = description.trim();

    if description.eq_ignore_ascii_case("excluded") {
        return Ok(Frequency::Excluded);
    }

    // Upper-bounded classes such as "<4-1%" keep their stated limits.
    let range_text = rest.replace([')', '%', '<'], "");
    let range_text = range_text.trim();

    let (low, high) = match range_text.split_once('-') {
        // Ranges are written high to low.
        Some((high, low)) => (parse_percent(low, text)?, parse_percent(high, text)?),
        None => {
            let value = parse_percent(range_text, text)?;
            (value, value)
        }
    };

    Ok(Frequency::Observed {
        description: description.to_string(),
        range: Interval::new(low.min(high), low.max(high)),
    })
}

fn parse_percent(value: &str, text: &str) -> Result<f64, IngestError> {
    value
        .trim()
        .parse::<f64>()
        .map(|percent| percent / 100.0)
        .map_err(|_| IngestError::InvalidNumber {
            field: "HPOFrequency".to_string(),
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(text: &str) -> (String, Interval) {
        match parse_frequency(text).unwrap() {
            Frequency::Observed { description, range } => (description, range),
            Frequency::Excluded => panic!("{text} parsed as excluded"),
        }
    }

    #[test]
    fn test_range_is_swapped_to_low_high() {
        let (description, range) = observed("Very frequent (99-80%)");
        assert_eq!(description, "Very frequent");
        assert_eq!(range, Interval::new(0.80, 0.99));
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let (description, range) = observed("Obligate (100%)");
        assert_eq!(description, "Obligate");
        assert_eq!(range, Interval::point(1.0));
    }

    #[test]
    fn test_less_than_marker_is_stripped() {
        let (_, range) = observed("Very rare (<4-1%)");
        assert_eq!(range, Interval::new(0.01, 0.04));
    }

    #[test]
    fn test_low_high_order_is_tolerated() {
        let (_, range) = observed("Occasional (5-29%)");
        assert_eq!(range, Interval::new(0.05, 0.29));
    }

    #[test]
    fn test_excluded() {
        assert_eq!(
            parse_frequency("Excluded (0%)").unwrap(),
            Frequency::Excluded
        );
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            parse_frequency("Frequent"),
            Err(IngestError::InvalidFrequency(_))
        ));
        assert!(matches!(
            parse_frequency("Frequent (often%)"),
            Err(IngestError::InvalidNumber { .. })
        ));
    }
}
