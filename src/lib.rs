pub mod case;
pub mod cli;
pub mod config;

pub use case::renderer::CaseStyle;
pub use case::tokenizer::{DelimiterPolicy, Token};
pub use case::validator::{CaseError, Input, InputKind, ValidationPolicy};
pub use case::{convert, convert_lenient, is_case, Conversion, ConvertOptions, Converter};
pub use config::Config;
