pub mod grid;
pub mod init;
pub mod root;
