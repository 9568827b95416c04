//! Console output formatter for conversion results

use colored::Colorize;
use numconv_domain::{ConversionError, ConversionRequest, ConversionResult, FormatTag};

/// Formats conversion results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Only the converted value, or the error message
    pub fn format_plain(result: &ConversionResult) -> String {
        match result {
            ConversionResult::Converted(value) => value.clone(),
            ConversionResult::Failed(message) => Self::error(message),
        }
    }

    /// Labelled line: `decimal 42 → binary 101010`
    pub fn format_full(request: &ConversionRequest, result: &ConversionResult) -> String {
        match result {
            ConversionResult::Converted(value) => format!(
                "{} {} {} {} {}",
                request.input_type.cyan(),
                request.input,
                "→".dimmed(),
                request.output_type.cyan(),
                value.bold()
            ),
            ConversionResult::Failed(message) => format!(
                "{} {} {} {} {}",
                request.input_type.cyan(),
                request.input,
                "→".dimmed(),
                request.output_type.cyan(),
                Self::error(message)
            ),
        }
    }

    /// The wire object on a single line
    pub fn format_json(result: &ConversionResult) -> String {
        serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One value in every format, as an aligned table
    pub fn format_all(
        input: &str,
        from: FormatTag,
        rendered: &[(FormatTag, Result<String, ConversionError>)],
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} ({})", input, from)));
        output.push('\n');

        let width = FormatTag::ALL
            .iter()
            .map(|tag| tag.as_str().len())
            .max()
            .unwrap_or(0);

        for (tag, outcome) in rendered {
            let label = format!("{:<width$}", tag.as_str());
            let value = match outcome {
                Ok(value) => value.clone(),
                Err(e) => Self::error(&e.to_string()),
            };
            output.push_str(&format!("  {}  {}\n", label.cyan().bold(), value));
        }

        output
    }

    /// Every format as one JSON object keyed by tag
    pub fn format_all_json(rendered: &[(FormatTag, Result<String, ConversionError>)]) -> String {
        let map: serde_json::Map<String, serde_json::Value> = rendered
            .iter()
            .map(|(tag, outcome)| {
                let result = ConversionResult::from(outcome.clone());
                let value = serde_json::to_value(&result).unwrap_or(serde_json::Value::Null);
                (tag.as_str().to_string(), value)
            })
            .collect();
        serde_json::to_string_pretty(&map).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        format!("{}\n{}", title.bold(), "-".repeat(40).cyan())
    }

    fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn without_color<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_format_plain_success() {
        let result = ConversionResult::Converted("101010".to_string());
        assert_eq!(without_color(|| ConsoleFormatter::format_plain(&result)), "101010");
    }

    #[test]
    fn test_format_plain_error() {
        let result = ConversionResult::Failed("Empty input".to_string());
        assert_eq!(
            without_color(|| ConsoleFormatter::format_plain(&result)),
            "Error: Empty input"
        );
    }

    #[test]
    fn test_format_full() {
        let request = ConversionRequest::new("42", "decimal", "binary");
        let result = ConversionResult::Converted("101010".to_string());
        assert_eq!(
            without_color(|| ConsoleFormatter::format_full(&request, &result)),
            "decimal 42 → binary 101010"
        );
    }

    #[test]
    fn test_format_json() {
        let result = ConversionResult::Converted("forty-two".to_string());
        assert_eq!(
            ConsoleFormatter::format_json(&result),
            r#"{"result":"forty-two","error":null}"#
        );
    }

    #[test]
    fn test_format_all_lists_every_format() {
        let rendered = vec![
            (FormatTag::Text, Ok("minus one".to_string())),
            (
                FormatTag::Base64,
                Err(ConversionError::UnrenderableNumber("negative".to_string())),
            ),
        ];
        let output = without_color(|| ConsoleFormatter::format_all("-1", FormatTag::Decimal, &rendered));
        assert!(output.starts_with("-1 (decimal)\n"));
        assert!(output.contains("  text         minus one\n"));
        assert!(output.contains("  base64       Error: Unable to render number: negative\n"));
    }

    #[test]
    fn test_format_all_json() {
        let rendered = vec![
            (FormatTag::Decimal, Ok("42".to_string())),
            (FormatTag::Base64, Ok("Kg==".to_string())),
        ];
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_all_json(&rendered)).unwrap();
        assert_eq!(value["decimal"]["result"], "42");
        assert_eq!(value["base64"]["result"], "Kg==");
        assert!(value["base64"]["error"].is_null());
    }
}
