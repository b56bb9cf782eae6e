pub mod check;
pub mod export;
pub mod init;
pub mod list;
pub mod registry_helpers;
pub mod show;
