pub mod extract;
pub mod init;
pub mod play;
pub mod visualize;
