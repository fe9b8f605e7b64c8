mod error;
mod source_file;
pub mod source_loader;

pub use error::LoadError;
pub use source_file::SourceFile;
pub use source_loader::{load_source_file, read_source_file, resolve_path};
