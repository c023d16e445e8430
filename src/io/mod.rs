//! Document input: decoding text, reading files and stdin, resolving paths

pub mod convert;
pub mod reader;
pub mod resolver;

pub use convert::YamlJsonConverter;
pub use reader::{DocumentFormat, DocumentReader, ReaderConfig};
pub use resolver::{FileResolver, ResolvedFile, ResolverConfig};
