pub mod detector;

pub use detector::{BinaryTypeDetector, DetectionError, FileCommand, MachOMagic};
