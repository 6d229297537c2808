/// Filesystem adapters for reading data files and writing pages
mod data_directory_reader;
mod directory_exporter;
mod file_writer;

pub use data_directory_reader::DataDirectoryReader;
pub use directory_exporter::DirectoryExporter;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
