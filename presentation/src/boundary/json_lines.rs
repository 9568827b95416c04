//! JSON-lines request loop.
//!
//! Reads one `{"input", "inputType", "outputType"}` object per line and writes
//! one `{"result", "error"}` object per line. A line that is not a valid
//! request (including one that is not UTF-8) is answered with an error
//! object; the loop only stops at end of input or on an I/O failure.

use numconv_application::ConvertUseCase;
use numconv_domain::util::preview;
use numconv_domain::{ConversionRequest, ConversionResult};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Serves conversion requests over a line-oriented reader/writer pair
pub struct JsonLinesServer {
    use_case: ConvertUseCase,
}

/// Counts of answered requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl JsonLinesServer {
    pub fn new(use_case: ConvertUseCase) -> Self {
        Self { use_case }
    }

    /// Answer a single raw line
    pub fn handle_line(&self, line: &str) -> ConversionResult {
        match serde_json::from_str::<ConversionRequest>(line) {
            Ok(request) => self.use_case.execute(&request),
            Err(e) => {
                warn!("Rejected request {}: {}", preview(line, 64), e);
                ConversionResult::Failed(format!("Invalid request: {}", e))
            }
        }
    }

    /// Run until `reader` is exhausted
    pub fn serve<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> io::Result<ServeSummary> {
        let mut summary = ServeSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and then fails as JSON
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let result = self.handle_line(line);
            if result.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }

            let encoded = serde_json::to_string(&result).map_err(io::Error::other)?;
            writeln!(writer, "{}", encoded)?;
            writer.flush()?;
        }

        Ok(summary)
    }
}
