pub mod base_file;
pub mod environment;
pub mod user_file;
