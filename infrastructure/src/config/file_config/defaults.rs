//! Default formats from TOML (`[defaults]` section)

use numconv_application::DefaultFormats;
use numconv_domain::FormatTag;
use serde::{Deserialize, Serialize};

/// Raw default-format configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    /// Format assumed when `--from` is not given
    pub input_format: Option<FormatTag>,
    /// Format rendered when `--to` is not given
    pub output_format: Option<FormatTag>,
}

impl FileDefaultsConfig {
    /// Overlay the configured formats on the built-in defaults
    pub fn to_default_formats(&self) -> DefaultFormats {
        let mut formats = DefaultFormats::default();
        if let Some(input) = self.input_format {
            formats = formats.with_input(input);
        }
        if let Some(output) = self.output_format {
            formats = formats.with_output(output);
        }
        formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let toml_str = r#"
[defaults]
input_format = "hexadecimal"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.input_format, Some(FormatTag::Hexadecimal));
        assert_eq!(config.defaults.output_format, None);

        let formats = config.defaults.to_default_formats();
        assert_eq!(formats.input, FormatTag::Hexadecimal);
        assert_eq!(formats.output, FormatTag::Text);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[defaults]
output_format = "roman"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
