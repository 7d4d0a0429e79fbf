//! Export Adapters — turn the rendered HTML document into PDF and DOCX
//! byte streams by shelling out to external converter binaries.
//!
//! The converters are opaque collaborators: this module owns only the call
//! contract (input markup, page options, output bytes) and makes no
//! assumption about the binary formats they produce.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::render::templates::DOCUMENT_WIDTH_PX;

pub mod handlers;

const PDF_CONVERTER: &str = "wkhtmltopdf";
const DOCX_CONVERTER: &str = "pandoc";

/// Reference document for the Word export. pandoc takes docx page geometry
/// from the reference document, not from CSS in the input markup; this one
/// declares half-inch (720-twip) margins on letter-size pages. The archive
/// is stored uncompressed.
const REFERENCE_DOCX: &[u8] = include_bytes!("../../assets/reference.docx");

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write scratch file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Converter '{converter}' could not be spawned: {source}")]
    Spawn {
        converter: &'static str,
        source: std::io::Error,
    },

    #[error("Converter '{converter}' failed: {stderr}")]
    Converter {
        converter: &'static str,
        stderr: String,
    },

    #[error("Converter task was cancelled")]
    Cancelled,
}

/// Runs the external converters against rendered markup.
///
/// Finished documents are also written into `export_dir` under the
/// download name, the only files this service ever persists.
#[derive(Clone)]
pub struct Exporter {
    export_dir: PathBuf,
}

impl Exporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    /// Converts the rendered document to PDF. The page width follows the
    /// rendered document's pixel width; margins are zero so the page is
    /// exactly the rendered surface.
    pub async fn to_pdf(&self, html: &str, file_name: &str) -> Result<Vec<u8>, ExportError> {
        let args = vec![
            "--quiet".to_string(),
            "--page-width".to_string(),
            format!("{DOCUMENT_WIDTH_PX}px"),
            "--margin-top".to_string(),
            "0".to_string(),
            "--margin-bottom".to_string(),
            "0".to_string(),
            "--margin-left".to_string(),
            "0".to_string(),
            "--margin-right".to_string(),
            "0".to_string(),
        ];
        self.run_converter(PDF_CONVERTER, args, html.to_string(), file_name)
            .await
    }

    /// Converts the rendered markup to a Word document. Half-inch page
    /// margins come from the bundled reference document; fidelity beyond
    /// that rests with the converter.
    pub async fn to_docx(&self, html: &str, file_name: &str) -> Result<Vec<u8>, ExportError> {
        let reference = tempfile::Builder::new().suffix(".docx").tempfile()?;
        std::fs::write(reference.path(), REFERENCE_DOCX)?;

        let args = docx_args(reference.path());
        self.run_converter(DOCX_CONVERTER, args, html.to_string(), file_name)
            .await
    }

    /// Writes the markup to a scratch file, runs the converter with the
    /// output path appended, and reads the result back. Blocking process
    /// work happens off the async runtime.
    async fn run_converter(
        &self,
        converter: &'static str,
        mut args: Vec<String>,
        html: String,
        file_name: &str,
    ) -> Result<Vec<u8>, ExportError> {
        std::fs::create_dir_all(&self.export_dir)?;
        let output_path = self.export_dir.join(file_name);

        let scratch = tempfile::Builder::new().suffix(".html").tempfile()?;
        std::fs::write(scratch.path(), &html)?;

        let input_path = scratch.path().to_path_buf();
        let output_for_task = output_path.clone();

        let output = tokio::task::spawn_blocking(move || {
            let mut command = Command::new(converter);
            if converter == DOCX_CONVERTER {
                // pandoc: `pandoc -f html -t docx input -o output`
                command
                    .args(&args)
                    .arg(&input_path)
                    .arg("-o")
                    .arg(&output_for_task);
            } else {
                // wkhtmltopdf: `wkhtmltopdf [options] input output`
                args.push(input_path.display().to_string());
                args.push(output_for_task.display().to_string());
                command.args(&args);
            }
            command.output()
        })
        .await
        .map_err(|_| ExportError::Cancelled)?
        .map_err(|source| ExportError::Spawn { converter, source })?;

        if !output.status.success() {
            return Err(ExportError::Converter {
                converter,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let bytes = std::fs::read(&output_path)?;
        debug!(
            converter,
            bytes = bytes.len(),
            path = %output_path.display(),
            "export produced a document"
        );
        Ok(bytes)
    }
}

fn docx_args(reference_path: &std::path::Path) -> Vec<String> {
    vec![
        "-f".to_string(),
        "html".to_string(),
        "-t".to_string(),
        "docx".to_string(),
        "--reference-doc".to_string(),
        reference_path.display().to_string(),
    ]
}

/// Download name: the resume owner's name with every space replaced by an
/// underscore, suffixed `_Resume.<ext>`.
pub fn export_file_name(owner_name: &str, extension: &str) -> String {
    format!("{}_Resume.{extension}", owner_name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_replaces_every_space() {
        assert_eq!(export_file_name("John Doe", "pdf"), "John_Doe_Resume.pdf");
        assert_eq!(
            export_file_name("Ana Maria da Silva", "docx"),
            "Ana_Maria_da_Silva_Resume.docx"
        );
    }

    #[test]
    fn test_export_file_name_without_spaces() {
        assert_eq!(export_file_name("Prince", "pdf"), "Prince_Resume.pdf");
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    #[test]
    fn test_reference_docx_declares_half_inch_margins() {
        // The archive is stored uncompressed, so the section properties of
        // word/document.xml are visible in the raw bytes.
        assert!(contains(REFERENCE_DOCX, b"<w:pgMar"));
        for side in ["top", "right", "bottom", "left"] {
            let attr = format!("w:{side}=\"720\"");
            assert!(contains(REFERENCE_DOCX, attr.as_bytes()), "missing {attr}");
        }
    }

    #[test]
    fn test_docx_invocation_passes_the_reference_document() {
        let args = docx_args(std::path::Path::new("/tmp/ref.docx"));
        let flag = args.iter().position(|a| a == "--reference-doc").unwrap();
        assert_eq!(args[flag + 1], "/tmp/ref.docx");
    }

    #[tokio::test]
    async fn test_missing_converter_surfaces_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        // A converter binary that cannot exist on the PATH.
        let result = exporter
            .run_converter(
                "definitely-not-a-real-converter",
                vec![],
                "<html></html>".to_string(),
                "out.pdf",
            )
            .await;

        match result {
            Err(ExportError::Spawn { .. }) => {}
            other => panic!("expected spawn error, got {other:?}"),
        }
    }
}
