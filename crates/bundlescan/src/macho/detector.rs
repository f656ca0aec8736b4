//! Mach-O binary type detection.
//!
//! Detection is a capability behind the [`BinaryTypeDetector`] trait so the
//! scanner can run either against native magic-number inspection
//! ([`MachOMagic`]) or against an external `file`-like tool ([`FileCommand`]).

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for binary type detection.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The external detection tool could not be run.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to spawn.
        program: String,
        /// Underlying spawn error.
        source: io::Error,
    },
}

/// Decides whether a file is a Mach-O binary.
pub trait BinaryTypeDetector {
    /// Check whether the file at `path` is a Mach-O binary.
    ///
    /// # Errors
    ///
    /// Returns a [`DetectionError`] if the file or the detection tool could
    /// not be read or run. Callers that scan whole bundles treat a failure
    /// as "not a candidate" rather than aborting.
    fn is_macho(&self, path: &Path) -> Result<bool, DetectionError>;
}

/// Native detector reading the Mach-O magic number.
///
/// Matches thin binaries of either endianness plus fat (universal) headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MachOMagic;

impl BinaryTypeDetector for MachOMagic {
    fn is_macho(&self, path: &Path) -> Result<bool, DetectionError> {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 4];
        match file.read_exact(&mut magic) {
            Ok(()) => {}
            // Shorter than a magic number: not a Mach-O, not an error.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(false),
            Err(e) => return Err(DetectionError::Io(e)),
        }

        let is_macho = matches!(
            magic,
            [0xfe, 0xed, 0xfa, 0xce]
                | [0xfe, 0xed, 0xfa, 0xcf]
                | [0xce, 0xfa, 0xed, 0xfe]
                | [0xcf, 0xfa, 0xed, 0xfe]
                | [0xca, 0xfe, 0xba, 0xbe]
                | [0xbe, 0xba, 0xfe, 0xca]
        );

        Ok(is_macho)
    }
}

/// Detector shelling out to a `file`-like tool.
///
/// Runs `<program> <path>` with stderr discarded and reports whether stdout
/// contains the marker substring `Mach-O`. The tool's exit status is ignored;
/// only a failure to spawn it counts as a detection error.
#[derive(Debug, Clone)]
pub struct FileCommand {
    program: OsString,
}

/// Marker substring looked for in the tool's output.
const MACHO_MARKER: &str = "Mach-O";

impl FileCommand {
    /// Create a detector invoking `program` per file.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FileCommand {
    fn default() -> Self {
        Self::new("file")
    }
}

impl BinaryTypeDetector for FileCommand {
    fn is_macho(&self, path: &Path) -> Result<bool, DetectionError> {
        let output = Command::new(&self.program)
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| DetectionError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.contains(MACHO_MARKER))
    }
}
