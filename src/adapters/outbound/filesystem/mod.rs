/// Filesystem adapters for document output
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
