//! Runner for the external executables converting SDB XML to and from `.bin` files.
//!
//! Each call stages its input and output in a fresh temporary directory that is removed when
//! the call returns, whether the executable succeeded, failed or timed out.

use std::{
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use utoipa::ToSchema;

use crate::server::error::codec::CodecError;

/// Default time an executable may run before it is killed.
pub const DEFAULT_CODEC_TIMEOUT: Duration = Duration::from_secs(30);

const XML_FILE: &str = "config.xml";
const BIN_FILE: &str = "config.bin";

#[derive(Clone, Debug)]
pub struct ExternalCodec {
    /// Invoked as `<generator> <xml-path> <bin-path>`.
    generator: Option<PathBuf>,
    /// Invoked as `<parser> <bin-path> <xml-path>`.
    parser: Option<PathBuf>,
    timeout: Duration,
}

/// Which codec executables are configured and present on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodecStatus {
    pub generator: bool,
    pub parser: bool,
}

impl Default for ExternalCodec {
    fn default() -> Self {
        Self {
            generator: None,
            parser: None,
            timeout: DEFAULT_CODEC_TIMEOUT,
        }
    }
}

impl ExternalCodec {
    pub fn new(generator: Option<PathBuf>, parser: Option<PathBuf>, timeout: Duration) -> Self {
        Self {
            generator,
            parser,
            timeout,
        }
    }

    /// Converts SDB XML into `.bin` bytes with the generator executable.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Contents of the `.bin` file written by the generator
    /// - `Err(CodecError)` - The generator is missing, failed, timed out or wrote nothing
    pub async fn generate(&self, xml: &str) -> Result<Vec<u8>, CodecError> {
        let generator = self
            .generator
            .as_deref()
            .ok_or(CodecError::ExecutableNotConfigured("generator"))?;

        let dir = tempfile::tempdir()?;
        let input = dir.path().join(XML_FILE);
        let output = dir.path().join(BIN_FILE);

        tokio::fs::write(&input, xml).await?;
        self.run(generator, &input, &output).await?;

        let bin = read_output(&output).await?;
        tracing::debug!("Generated {} byte .bin file", bin.len());

        Ok(bin)
    }

    /// Converts `.bin` bytes into SDB XML with the parser executable.
    ///
    /// # Returns
    /// - `Ok(String)` - The XML written by the parser
    /// - `Err(CodecError)` - The parser is missing, failed, timed out or wrote no valid UTF-8
    pub async fn parse(&self, bin: &[u8]) -> Result<String, CodecError> {
        let parser = self
            .parser
            .as_deref()
            .ok_or(CodecError::ExecutableNotConfigured("parser"))?;

        let dir = tempfile::tempdir()?;
        let input = dir.path().join(BIN_FILE);
        let output = dir.path().join(XML_FILE);

        tokio::fs::write(&input, bin).await?;
        self.run(parser, &input, &output).await?;

        let xml = read_output(&output).await?;

        String::from_utf8(xml).map_err(|_| CodecError::InvalidUtf8)
    }

    pub async fn check_executables(&self) -> CodecStatus {
        CodecStatus {
            generator: is_present(self.generator.as_deref()).await,
            parser: is_present(self.parser.as_deref()).await,
        }
    }

    async fn run(&self, executable: &Path, input: &Path, output: &Path) -> Result<(), CodecError> {
        if !is_present(Some(executable)).await {
            return Err(CodecError::ExecutableNotFound(executable.to_path_buf()));
        }

        let mut command = Command::new(executable);
        command
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let result = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    "{} did not finish within {:?}, killed",
                    executable.display(),
                    self.timeout
                );
                return Err(CodecError::Timeout(self.timeout.as_secs()));
            }
        };

        if !result.status.success() {
            return Err(CodecError::ProcessFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

async fn is_present(path: Option<&Path>) -> bool {
    match path {
        Some(path) => tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false),
        None => false,
    }
}

async fn read_output(path: &Path) -> Result<Vec<u8>, CodecError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CodecError::OutputMissing),
        Err(e) => Err(e.into()),
    }
}
