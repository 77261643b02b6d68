pub mod tokenizer;
pub mod parser;
pub mod ast;
pub mod error;
pub mod serializer;
pub mod options;
pub mod expand;

pub use tokenizer::{tokenize, LogicalLine};
pub use parser::{parse, SUPPORTED_VERSIONS};
pub use ast::{Watch, WatchFile, DEFAULT_VERSION};
pub use serializer::serialize;
pub use options::{serialize_options, split_options};
pub use expand::expand;
pub use error::{ParseError, ParseResult};

#[cfg(feature = "pretty-errors")]
pub use error::format_error;
