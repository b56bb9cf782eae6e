pub mod toml_parser;
