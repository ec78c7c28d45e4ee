use log::info;
use std::io::{self, Write};
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::config::{DEFAULT_INPUT, SUCCESS_MESSAGE};
use crate::models::{ApplicationError, ApplicationResult, ProcessResult};

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

pub struct Runner {
    verbose: bool,
    processed_count: usize,
}

impl Runner {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            processed_count: 0,
        }
    }

    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    async fn read_input(&self, source: Option<&Path>) -> ApplicationResult<String> {
        match non_empty(source) {
            Some(path) => {
                if self.verbose {
                    info!("Reading from file: {}", path.display());
                }
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| ApplicationError::ReadInput {
                        path: path.to_path_buf(),
                        source,
                    })?;
                // Content is never inspected, so bytes that are not UTF-8 are not an error.
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            None => {
                if self.verbose {
                    info!("Using default test data");
                }
                Ok(DEFAULT_INPUT.to_string())
            }
        }
    }

    /// Wraps the input in a result record. The input itself is not carried
    /// into the record.
    pub fn process(&self, _input: &str) -> ProcessResult {
        ProcessResult::success(SUCCESS_MESSAGE)
    }

    /// Reads the source and returns the serialized record without emitting it.
    pub async fn render(&self, source: Option<&Path>) -> ApplicationResult<String> {
        let input = self.read_input(source).await?;
        let result = self.process(&input);
        result.to_pretty_json()
    }

    async fn write_output<W: Write>(
        &self,
        dest: Option<&Path>,
        output: &str,
        console: &mut W,
    ) -> ApplicationResult<()> {
        let Some(path) = non_empty(dest) else {
            // A closed stdout (e.g. piped into `true`) is ignored rather than failing the run.
            let _ = writeln!(console, "{output}").and_then(|()| console.flush());
            return Ok(());
        };

        if self.verbose {
            info!("Writing results to: {}", path.display());
        }
        let write_err = |source| ApplicationError::WriteOutput {
            path: path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(path).await.map_err(write_err)?;
        file.write_all(output.as_bytes()).await.map_err(write_err)?;
        file.flush().await.map_err(write_err)?;
        Ok(())
    }

    pub async fn execute(&mut self, source: Option<&Path>, dest: Option<&Path>) -> ApplicationResult<()> {
        self.execute_with_console(source, dest, &mut io::stdout()).await
    }

    /// Same as [`Runner::execute`], with the console output sent to `console`
    /// instead of stdout.
    pub async fn execute_with_console<W: Write>(
        &mut self,
        source: Option<&Path>,
        dest: Option<&Path>,
        console: &mut W,
    ) -> ApplicationResult<()> {
        if self.verbose {
            info!("Starting StateChannel processing...");
        }

        let output = self.render(source).await?;
        self.write_output(dest, &output, console).await?;

        self.processed_count += 1;
        Ok(())
    }
}
