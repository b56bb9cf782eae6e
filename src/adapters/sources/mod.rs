pub mod dir_provider;
