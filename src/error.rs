use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is empty: {0}")]
    EmptyInput(PathBuf),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Image encode error: {0}")]
    ImageEncode(#[from] image::ImageError),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_error_read() {
        let error = ArtError::Read {
            path: PathBuf::from("roms/game.rom"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read roms/game.rom: missing");
    }

    #[test]
    fn test_art_error_empty_input() {
        let error = ArtError::EmptyInput(PathBuf::from("blank.tap"));
        assert_eq!(error.to_string(), "Input is empty: blank.tap");
    }

    #[test]
    fn test_art_error_png_encode() {
        let error = ArtError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_art_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ArtError = io.into();
        match error {
            ArtError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_art_error_from_yaml() {
        let yaml = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        let error: ArtError = yaml.into();
        assert!(error.to_string().starts_with("Config parse error: "));
    }
}
