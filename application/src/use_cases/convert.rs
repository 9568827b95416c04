//! Convert use case.
//!
//! The conversion facade: resolves the declared formats, reads the input into
//! an integer with the matching codec, and renders it with the output codec.
//! Every failure along the way becomes the `error` side of a
//! [`ConversionResult`]; nothing is propagated past this boundary.

use crate::ports::conversion_history::{
    ConversionEvent, ConversionHistory, NoConversionHistory,
};
use numconv_domain::codec::{base64, radix, text};
use numconv_domain::util::preview;
use numconv_domain::{
    BigInt, CodecKind, ConversionError, ConversionRequest, ConversionResult, FormatTag,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Output type recorded when a `convert_all` input cannot be parsed
const ALL_FORMATS: &str = "all";

/// Use case for converting a number between textual encodings.
///
/// Stateless apart from the optional history sink, so one instance can serve
/// any number of requests (and threads).
#[derive(Clone)]
pub struct ConvertUseCase {
    history: Arc<dyn ConversionHistory>,
}

impl Default for ConvertUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertUseCase {
    pub fn new() -> Self {
        Self {
            history: Arc::new(NoConversionHistory),
        }
    }

    /// Create with a history sink.
    pub fn with_history(mut self, history: Arc<dyn ConversionHistory>) -> Self {
        self.history = history;
        self
    }

    /// Run one boundary request.
    ///
    /// Format tags are resolved here, so an unknown tag yields an error result
    /// like any other failure.
    pub fn execute(&self, request: &ConversionRequest) -> ConversionResult {
        info!(
            "Converting {} -> {}: {}",
            request.input_type,
            request.output_type,
            preview(&request.input, 64)
        );

        let outcome = request
            .input_format()
            .and_then(|from| self.parse_input(&request.input, from))
            .and_then(|value| {
                let to = request.output_format()?;
                render_output(&value, to)
            });

        if let Err(e) = &outcome {
            warn!("Conversion failed: {}", e);
        }

        let result = ConversionResult::from(outcome);
        self.history
            .record(ConversionEvent::new("convert", request, &result));
        result
    }

    /// Convert with already-resolved formats.
    pub fn convert_value(
        &self,
        input: &str,
        from: FormatTag,
        to: FormatTag,
    ) -> Result<String, ConversionError> {
        let value = self.parse_input(input, from)?;
        render_output(&value, to)
    }

    /// Parse once and render into every format, in [`FormatTag::ALL`] order.
    ///
    /// Fails as a whole only when the input cannot be parsed; a format that
    /// cannot represent the value (base64 for negatives) fails on its own.
    pub fn convert_to_all(
        &self,
        input: &str,
        from: FormatTag,
    ) -> Result<Vec<(FormatTag, Result<String, ConversionError>)>, ConversionError> {
        info!("Converting {} -> all formats: {}", from, preview(input, 64));

        let value = match self.parse_input(input, from) {
            Ok(value) => value,
            Err(e) => {
                warn!("Conversion failed: {}", e);
                let request = ConversionRequest::new(input, from.as_str(), ALL_FORMATS);
                let result = ConversionResult::Failed(e.to_string());
                self.history
                    .record(ConversionEvent::new("convert_all", &request, &result));
                return Err(e);
            }
        };

        let rendered: Vec<_> = FormatTag::ALL
            .into_iter()
            .map(|to| (to, render_output(&value, to)))
            .collect();

        for (to, outcome) in &rendered {
            let request = ConversionRequest::typed(input, from, *to);
            let result = ConversionResult::from(outcome.clone());
            self.history
                .record(ConversionEvent::new("convert_all", &request, &result));
        }

        Ok(rendered)
    }

    fn parse_input(&self, input: &str, from: FormatTag) -> Result<BigInt, ConversionError> {
        let value = match from.codec() {
            CodecKind::Text => BigInt::from(text::parse(input)?),
            CodecKind::Radix(base) => radix::parse(input, base)?,
            CodecKind::Base64 => BigInt::from(base64::decode(input)?),
        };
        debug!("Parsed {} input ({} bits)", from, value.bits());
        Ok(value)
    }
}

fn render_output(value: &BigInt, to: FormatTag) -> Result<String, ConversionError> {
    debug!("Rendering as {}", to);
    match to.codec() {
        CodecKind::Text => text::render(value),
        CodecKind::Radix(base) => Ok(radix::format(value, base)),
        CodecKind::Base64 => {
            let magnitude = value.to_biguint().ok_or_else(|| {
                ConversionError::UnrenderableNumber(
                    "base64 cannot represent negative numbers".to_string(),
                )
            })?;
            Ok(base64::encode(&magnitude))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHistory {
        events: Mutex<Vec<ConversionEvent>>,
    }

    impl ConversionHistory for RecordingHistory {
        fn record(&self, event: ConversionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn convert(input: &str, input_type: &str, output_type: &str) -> ConversionResult {
        ConvertUseCase::new().execute(&ConversionRequest::new(input, input_type, output_type))
    }

    fn converted(value: &str) -> ConversionResult {
        ConversionResult::Converted(value.to_string())
    }

    #[test]
    fn test_decimal_to_binary() {
        assert_eq!(convert("42", "decimal", "binary"), converted("101010"));
    }

    #[test]
    fn test_binary_to_decimal() {
        assert_eq!(convert("101010", "binary", "decimal"), converted("42"));
    }

    #[test]
    fn test_octal_both_ways() {
        assert_eq!(convert("42", "decimal", "octal"), converted("52"));
        assert_eq!(convert("52", "octal", "decimal"), converted("42"));
    }

    #[test]
    fn test_hexadecimal_both_ways() {
        assert_eq!(convert("42", "decimal", "hexadecimal"), converted("2a"));
        assert_eq!(convert("2a", "hexadecimal", "decimal"), converted("42"));
    }

    #[test]
    fn test_hexadecimal_to_text() {
        assert_eq!(convert("2a", "hexadecimal", "text"), converted("forty-two"));
    }

    #[test]
    fn test_text_to_decimal() {
        assert_eq!(convert("forty two", "text", "decimal"), converted("42"));
        assert_eq!(
            convert("one hundred and twenty-three", "text", "decimal"),
            converted("123")
        );
    }

    #[test]
    fn test_base64_both_ways() {
        assert_eq!(convert("Kg==", "base64", "decimal"), converted("42"));
        assert_eq!(convert("42", "decimal", "base64"), converted("Kg=="));
    }

    #[test]
    fn test_all_numeric_combinations() {
        let values = [
            ("binary", "101010"),
            ("octal", "52"),
            ("decimal", "42"),
            ("hexadecimal", "2a"),
            ("base64", "Kg=="),
        ];
        for (from, input) in values {
            for (to, expected) in values {
                assert_eq!(
                    convert(input, from, to),
                    converted(expected),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_zero_in_every_format() {
        let values = [
            ("binary", "0"),
            ("octal", "0"),
            ("decimal", "0"),
            ("hexadecimal", "0"),
            ("base64", "AA=="),
            ("text", "zero"),
        ];
        for (from, input) in values {
            for (to, expected) in values {
                assert_eq!(
                    convert(input, from, to),
                    converted(expected),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(convert("-42", "decimal", "text"), converted("minus forty-two"));
        assert_eq!(convert("-42", "decimal", "binary"), converted("-101010"));
        assert_eq!(convert("-2a", "hexadecimal", "octal"), converted("-52"));
    }

    #[test]
    fn test_negative_to_base64_is_an_error() {
        let result = convert("-42", "decimal", "base64");
        assert_eq!(
            result.error(),
            Some("Unable to render number: base64 cannot represent negative numbers")
        );
    }

    #[test]
    fn test_invalid_inputs_are_errors() {
        let cases = [
            ("102", "binary"),
            ("89", "octal"),
            ("xyz", "hexadecimal"),
            ("invalid!", "base64"),
            ("", "base64"),
            ("invalid text", "text"),
            ("", "decimal"),
        ];
        for (input, from) in cases {
            let result = convert(input, from, "decimal");
            assert!(result.error().is_some(), "{input:?} as {from}");
            assert!(result.result().is_none());
        }
    }

    #[test]
    fn test_unknown_input_format() {
        let result = convert("42", "roman", "decimal");
        assert_eq!(
            result.error(),
            Some(ConversionError::InvalidFormatTag("roman".into()).to_string().as_str())
        );
    }

    #[test]
    fn test_unknown_output_format() {
        let result = convert("42", "decimal", "roman");
        assert!(result.error().unwrap().contains("'roman'"));
    }

    #[test]
    fn test_bad_input_reported_before_bad_output_format() {
        let result = convert("xyz", "decimal", "roman");
        assert!(result.error().unwrap().starts_with("Invalid digit 'x'"));
    }

    #[test]
    fn test_large_values_pass_through() {
        let input = "123456789012345678901234567890";
        let hex = convert(input, "decimal", "hexadecimal");
        let back = convert(hex.result().unwrap(), "hexadecimal", "decimal");
        assert_eq!(back, converted(input));

        let b64 = convert(input, "decimal", "base64");
        let back = convert(b64.result().unwrap(), "base64", "decimal");
        assert_eq!(back, converted(input));
    }

    #[test]
    fn test_long_base64_to_text() {
        // 30 bytes of 0xff, i.e. 2^240 - 1
        let input = "/".repeat(40);
        let result = convert(&input, "base64", "text");
        let text = result.result().unwrap();
        assert!(
            text.starts_with("one trevigintillion, seven hundred and sixty-six duovigintillion"),
            "{text}"
        );
        assert!(text.ends_with("seven hundred and seventy-five"), "{text}");
    }

    #[test]
    fn test_convert_value_typed() {
        let use_case = ConvertUseCase::new();
        assert_eq!(
            use_case
                .convert_value("forty two", FormatTag::Text, FormatTag::Hexadecimal)
                .unwrap(),
            "2a"
        );
        assert_eq!(
            use_case
                .convert_value("2", FormatTag::Binary, FormatTag::Decimal)
                .unwrap_err(),
            ConversionError::InvalidDigit {
                digit: '2',
                position: 0,
                radix: 2
            }
        );
    }

    #[test]
    fn test_convert_to_all() {
        let rendered = ConvertUseCase::new()
            .convert_to_all("42", FormatTag::Decimal)
            .unwrap();
        let values: Vec<_> = rendered
            .into_iter()
            .map(|(tag, outcome)| (tag, outcome.unwrap()))
            .collect();
        assert_eq!(
            values,
            vec![
                (FormatTag::Text, "forty-two".to_string()),
                (FormatTag::Binary, "101010".to_string()),
                (FormatTag::Octal, "52".to_string()),
                (FormatTag::Decimal, "42".to_string()),
                (FormatTag::Hexadecimal, "2a".to_string()),
                (FormatTag::Base64, "Kg==".to_string()),
            ]
        );
    }

    #[test]
    fn test_convert_to_all_negative_only_base64_fails() {
        let rendered = ConvertUseCase::new()
            .convert_to_all("-1", FormatTag::Decimal)
            .unwrap();
        for (tag, outcome) in rendered {
            assert_eq!(outcome.is_err(), tag == FormatTag::Base64, "{tag}");
        }
    }

    #[test]
    fn test_convert_to_all_bad_input() {
        assert!(ConvertUseCase::new()
            .convert_to_all("twelvety", FormatTag::Text)
            .is_err());
    }

    #[test]
    fn test_history_records_success_and_failure() {
        let history = Arc::new(RecordingHistory::default());
        let use_case = ConvertUseCase::new().with_history(history.clone());

        use_case.execute(&ConversionRequest::new("42", "decimal", "binary"));
        use_case.execute(&ConversionRequest::new("42", "decimal", "roman"));

        let events = history.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "convert");
        assert_eq!(events[0].outcome.result.as_deref(), Some("101010"));
        assert!(events[0].outcome.error.is_none());
        assert_eq!(events[1].output_type, "roman");
        assert!(events[1].outcome.result.is_none());
        assert!(events[1].outcome.error.is_some());
    }

    #[test]
    fn test_history_records_each_format_of_convert_to_all() {
        let history = Arc::new(RecordingHistory::default());
        let use_case = ConvertUseCase::new().with_history(history.clone());

        use_case.convert_to_all("7", FormatTag::Octal).unwrap();

        let events = history.events.lock().unwrap();
        assert_eq!(events.len(), FormatTag::ALL.len());
        assert!(events.iter().all(|e| e.event_type == "convert_all"));
        assert_eq!(events[0].output_type, "text");
        assert_eq!(events[0].outcome.result.as_deref(), Some("seven"));
    }

    #[test]
    fn test_history_records_failed_convert_to_all() {
        let history = Arc::new(RecordingHistory::default());
        let use_case = ConvertUseCase::new().with_history(history.clone());

        assert!(use_case.convert_to_all("9", FormatTag::Octal).is_err());

        let events = history.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "convert_all");
        assert_eq!(events[0].input, "9");
        assert_eq!(events[0].input_type, "octal");
        assert_eq!(events[0].output_type, "all");
        assert!(events[0].outcome.result.is_none());
        assert_eq!(
            events[0].outcome.error.as_deref(),
            Some("Invalid digit '9' at position 0 for base 8")
        );
    }
}
