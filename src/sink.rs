//! Destinations for exported text.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::SinkError;

/// Somewhere an export can be delivered to, such as the clipboard.
pub trait ExportSink {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Delivers the text.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink is unavailable or delivery fails.
    fn deliver(&mut self, text: &str) -> Result<(), SinkError>;
}

/// Sink that keeps delivered texts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<String>,
    failure: Option<SinkError>,
}

impl MemorySink {
    /// Creates a sink that accepts every delivery.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delivered: Vec::new(),
            failure: None,
        }
    }

    /// Creates a sink that rejects every delivery with `error`.
    #[must_use]
    pub fn failing(error: SinkError) -> Self {
        Self {
            delivered: Vec::new(),
            failure: Some(error),
        }
    }

    /// Returns the texts delivered so far.
    #[must_use]
    pub fn delivered(&self) -> &[String] {
        &self.delivered
    }
}

impl ExportSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.delivered.push(text.to_string());
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use process::{CommandSink, WriterSink};

#[cfg(feature = "std")]
mod process {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use std::io::{ErrorKind, Write};
    use std::process::{Command, Stdio};

    use super::ExportSink;
    use crate::error::SinkError;

    /// Sink piping the text to the standard input of a program, typically a
    /// clipboard tool such as `pbcopy`, `wl-copy` or `xclip`.
    #[derive(Debug, Clone)]
    pub struct CommandSink {
        program: String,
        args: Vec<String>,
    }

    impl CommandSink {
        /// Creates a sink running `program` with `args`.
        #[must_use]
        pub fn new<I, A>(program: impl Into<String>, args: I) -> Self
        where
            I: IntoIterator<Item = A>,
            A: Into<String>,
        {
            Self {
                program: program.into(),
                args: args.into_iter().map(Into::into).collect(),
            }
        }

        /// Parses a command line such as `"xclip -selection clipboard"`.
        ///
        /// Returns `None` for a blank line.
        #[must_use]
        pub fn from_command_line(line: &str) -> Option<Self> {
            let mut parts = line.split_whitespace();
            let program = parts.next()?;
            Some(Self::new(program, parts))
        }
    }

    fn failed(err: &std::io::Error) -> SinkError {
        SinkError::Failed(err.to_string())
    }

    impl ExportSink for CommandSink {
        fn name(&self) -> &str {
            &self.program
        }

        fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
            let mut child = Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|err| {
                    if err.kind() == ErrorKind::NotFound {
                        SinkError::Unavailable
                    } else {
                        failed(&err)
                    }
                })?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).map_err(|err| failed(&err))?;
            }

            let status = child.wait().map_err(|err| failed(&err))?;
            if status.success() {
                Ok(())
            } else {
                Err(SinkError::Failed(alloc::format!(
                    "`{}` exited with {status}",
                    self.program
                )))
            }
        }
    }

    /// Sink writing the text to a writer, for manual copying.
    #[derive(Debug)]
    pub struct WriterSink<W> {
        writer: W,
    }

    impl<W: Write> WriterSink<W> {
        /// Creates a sink writing to `writer`.
        pub const fn new(writer: W) -> Self {
            Self { writer }
        }

        /// Returns the underlying writer.
        pub fn into_inner(self) -> W {
            self.writer
        }
    }

    impl<W: Write> ExportSink for WriterSink<W> {
        fn name(&self) -> &str {
            "writer"
        }

        fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
            writeln!(self.writer, "{text}")
                .and_then(|()| self.writer.flush())
                .map_err(|err| failed(&err))
        }
    }
}
