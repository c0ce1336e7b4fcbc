//! Ghostscript-backed PDF compression.

use std::path::{Path, PathBuf};

use paperdrop_core::config::ConverterConfig;
use paperdrop_core::errors::ConvertError;
use paperdrop_core::traits::Converter;

use crate::process::run_tool;

/// Subdirectory, next to the input, that receives compressed output.
pub const OUTPUT_DIR: &str = "compressed";

/// Rewrites a PDF through `gs -sDEVICE=pdfwrite` with a fixed
/// `-dPDFSETTINGS` profile. The output keeps the input's file name and is
/// written to `<input dir>/compressed/`.
#[derive(Debug, Clone)]
pub struct GhostscriptConverter {
    binary: String,
    quality_profile: String,
}

impl GhostscriptConverter {
    pub fn new(binary: impl Into<String>, quality_profile: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            quality_profile: quality_profile.into(),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.effective_binary(), config.effective_quality_profile())
    }

    /// Where the compressed copy of `input` is written.
    pub fn output_path(input: &Path) -> PathBuf {
        let dir = input.parent().unwrap_or_else(|| Path::new("."));
        let name = input.file_name().unwrap_or_default();
        dir.join(OUTPUT_DIR).join(name)
    }

    fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-sDEVICE=pdfwrite".to_string(),
            "-dCompatibilityLevel=1.4".to_string(),
            format!("-dPDFSETTINGS=/{}", self.quality_profile),
            "-dNOPAUSE".to_string(),
            "-dQUIET".to_string(),
            "-dBATCH".to_string(),
            format!("-sOutputFile={}", output.display()),
            input.display().to_string(),
        ]
    }
}

impl Converter for GhostscriptConverter {
    fn compress(&self, local_path: &Path) -> Result<PathBuf, ConvertError> {
        let output = Self::output_path(local_path);
        if let Some(dir) = output.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ConvertError::Io {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let run = run_tool(&self.binary, self.arguments(local_path, &output), &[]).map_err(
            |e| ConvertError::Spawn {
                program: self.binary.clone(),
                reason: e.to_string(),
            },
        )?;
        if !run.success() {
            return Err(ConvertError::ToolFailed {
                program: self.binary.clone(),
                status: run.status(),
                stderr: run.stderr(),
            });
        }
        if !output.is_file() {
            return Err(ConvertError::MissingOutput {
                program: self.binary.clone(),
                path: output.display().to_string(),
            });
        }

        tracing::info!(
            input = %local_path.display(),
            output = %output.display(),
            profile = %self.quality_profile,
            "convert: compressed"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_keeps_file_name_in_sibling_dir() {
        let out = GhostscriptConverter::output_path(Path::new("/srv/pdfs/Brief/report.pdf"));
        assert_eq!(out, PathBuf::from("/srv/pdfs/Brief/compressed/report.pdf"));
    }

    #[test]
    fn arguments_carry_the_quality_profile() {
        let gs = GhostscriptConverter::new("gs", "ebook");
        let args = gs.arguments(Path::new("in.pdf"), Path::new("compressed/in.pdf"));
        assert!(args.contains(&"-dPDFSETTINGS=/ebook".to_string()));
        assert!(args.contains(&"-sOutputFile=compressed/in.pdf".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("in.pdf"));
    }
}
