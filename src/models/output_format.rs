use clap::ValueEnum;
use std::fmt;

/// File format of the saved artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    #[value(alias = "jpg")]
    Jpeg,
    Bmp,
}

impl OutputFormat {
    /// File extension written for this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Bmp => "bmp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpeg");
        assert_eq!(OutputFormat::Bmp.extension(), "bmp");
    }

    #[test]
    fn test_value_names() {
        assert_eq!(OutputFormat::from_str("png", true), Ok(OutputFormat::Png));
        assert_eq!(OutputFormat::from_str("JPG", true), Ok(OutputFormat::Jpeg));
        assert!(OutputFormat::from_str("gif", true).is_err());
    }

    #[test]
    fn test_display_is_extension() {
        assert_eq!(OutputFormat::Bmp.to_string(), "bmp");
    }
}
