use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::ExportError;

/// Converter used when nothing else is configured.
pub const DEFAULT_CONVERTER: &str = "wkhtmltopdf";

/// Turns printable markup into a downloadable document.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Convert `markup` and return the document bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails. Failures are not retried.
    async fn convert(&self, markup: &str) -> Result<Vec<u8>, ExportError>;
}

/// Pipes markup through an external program: markup on stdin, document on
/// stdout.
#[derive(Debug, Clone)]
pub struct CommandExporter {
    program: String,
    args: Vec<String>,
}

impl CommandExporter {
    /// `program` invoked as `<program> --quiet - -`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec!["--quiet".into(), "-".into(), "-".into()],
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandExporter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

#[async_trait]
impl DocumentExporter for CommandExporter {
    async fn convert(&self, markup: &str) -> Result<Vec<u8>, ExportError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Stdin is fed while stdout and stderr drain; dropping it closes the pipe.
        let stdin = child.stdin.take();
        let feed = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(markup.as_bytes()).await {
                // Converters may exit before draining stdin.
                Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;
        fed?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            log::warn!("{} failed: {stderr}", self.program);
            return Err(ExportError::Failed {
                status: output.status,
                stderr,
            });
        }
        if output.stdout.is_empty() {
            return Err(ExportError::EmptyOutput);
        }
        Ok(output.stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pipes_markup_through_program() {
        let exporter = CommandExporter::new("cat").with_args(Vec::new());
        let bytes = exporter.convert("<p>hi</p>").await.unwrap();
        assert_eq!(bytes, b"<p>hi</p>");
    }

    #[tokio::test]
    async fn large_markup_does_not_stall_the_pipe() {
        let markup = "<p>row</p>\n".repeat(100_000);
        let exporter = CommandExporter::new("cat").with_args(Vec::new());
        let bytes = tokio::time::timeout(std::time::Duration::from_secs(30), exporter.convert(&markup))
            .await
            .expect("converter stalled")
            .unwrap();
        assert_eq!(bytes.len(), markup.len());
        assert_eq!(bytes, markup.as_bytes());
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let exporter = CommandExporter::new("sh").with_args(vec![
            "-c".into(),
            "cat >/dev/null; echo broken >&2; exit 3".into(),
        ]);
        let err = exporter.convert("<p>hi</p>").await.unwrap_err();
        match err {
            ExportError::Failed { status, stderr } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_output_is_an_error() {
        let exporter = CommandExporter::new("sh").with_args(vec!["-c".into(), "cat >/dev/null".into()]);
        let err = exporter.convert("<p>hi</p>").await.unwrap_err();
        assert!(matches!(err, ExportError::EmptyOutput));
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let exporter = CommandExporter::new("definitely-not-a-converter-binary");
        let err = exporter.convert("<p>hi</p>").await.unwrap_err();
        assert!(matches!(err, ExportError::Spawn { ref program, .. } if program == "definitely-not-a-converter-binary"));
    }

    #[test]
    fn default_invocation_reads_stdin_writes_stdout() {
        let exporter = CommandExporter::default();
        assert_eq!(exporter.program(), DEFAULT_CONVERTER);
        assert_eq!(exporter.args, vec!["--quiet", "-", "-"]);
    }
}
