pub mod parser;
pub mod source_provider;
