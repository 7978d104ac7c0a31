pub mod archive;
pub mod edit;
pub mod init;
