//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave
//! when the caller leaves something unspecified.

use numconv_domain::FormatTag;

/// Formats used when a request does not name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFormats {
    /// Format assumed for the input value.
    pub input: FormatTag,
    /// Format the value is rendered into.
    pub output: FormatTag,
}

impl Default for DefaultFormats {
    fn default() -> Self {
        Self {
            input: FormatTag::Decimal,
            output: FormatTag::Text,
        }
    }
}

impl DefaultFormats {
    pub fn with_input(mut self, input: FormatTag) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: FormatTag) -> Self {
        self.output = output;
        self
    }

    /// Resolve explicit choices against these defaults.
    pub fn resolve(
        &self,
        input: Option<FormatTag>,
        output: Option<FormatTag>,
    ) -> (FormatTag, FormatTag) {
        (input.unwrap_or(self.input), output.unwrap_or(self.output))
    }
}
