pub mod bundle;
pub mod error;
pub mod macho;
pub mod scan;

pub use bundle::{validate_bundle_path, PathEntry};
pub use error::Error;
pub use macho::{BinaryTypeDetector, DetectionError, FileCommand, MachOMagic};
pub use scan::{BundleScanner, ScanReport};

pub type Result<T> = std::result::Result<T, Error>;
