pub mod init;
pub mod inspect;
pub mod odds;
pub mod process;
pub mod stats;
