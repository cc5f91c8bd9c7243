//! Run options and their validation

use std::path::PathBuf;

use pixpress_ico::EncodeOptions;

/// Default root of the categorized output tree
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Largest accepted resize percentage
pub const MAX_RESIZE_PERCENT: u32 = 99;

/// Largest accepted compression/quality level
pub const MAX_COMPRESS_LEVEL: u32 = 100;

/// Errors found while validating options
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("resize percentage must be between 1 and 99, or 0 for no resizing (got {0})")]
    ResizeOutOfRange(u32),

    #[error("compression level must be between 1 and 100, or 0 for no compression (got {0})")]
    CompressOutOfRange(u32),

    #[error("input file does not exist: {}", .0.display())]
    InputMissing(PathBuf),
}

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    /// Explicit output filename (only the file name component is used)
    pub output: Option<PathBuf>,
    /// Resize percentage, 0 = keep size
    pub resize: u32,
    /// Quality/compression level, 0 = encoder default
    pub compress: u32,
    pub to_ico: bool,
    pub ico: EncodeOptions,
    pub output_root: PathBuf,
}

impl Options {
    /// Options for `input` with every operation disabled
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            resize: 0,
            compress: 0,
            to_ico: false,
            ico: EncodeOptions::default(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }

    /// Check ranges and that the input exists
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.resize > MAX_RESIZE_PERCENT {
            return Err(OptionsError::ResizeOutOfRange(self.resize));
        }
        if self.compress > MAX_COMPRESS_LEVEL {
            return Err(OptionsError::CompressOutOfRange(self.compress));
        }
        if !self.input.exists() {
            return Err(OptionsError::InputMissing(self.input.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn existing() -> (NamedTempFile, Options) {
        let file = NamedTempFile::new().unwrap();
        let options = Options::new(file.path());
        (file, options)
    }

    #[test]
    fn test_defaults_are_valid() {
        let (_file, options) = existing();
        assert!(options.validate().is_ok());
        assert_eq!(options.output_root, PathBuf::from("output"));
        assert!(options.ico.auto_downscale);
    }

    #[test]
    fn test_resize_range() {
        let (_file, mut options) = existing();
        options.resize = 99;
        assert!(options.validate().is_ok());

        options.resize = 100;
        assert!(matches!(
            options.validate(),
            Err(OptionsError::ResizeOutOfRange(100))
        ));
    }

    #[test]
    fn test_compress_range() {
        let (_file, mut options) = existing();
        options.compress = 100;
        assert!(options.validate().is_ok());

        options.compress = 101;
        assert!(matches!(
            options.validate(),
            Err(OptionsError::CompressOutOfRange(101))
        ));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options::new(dir.path().join("nope.png"));
        let err = options.validate().unwrap_err();
        assert!(matches!(err, OptionsError::InputMissing(_)));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn test_range_checked_before_input() {
        let mut options = Options::new("/definitely/not/here.png");
        options.resize = 150;
        assert!(matches!(
            options.validate(),
            Err(OptionsError::ResizeOutOfRange(150))
        ));
    }
}
