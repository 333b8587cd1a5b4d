pub mod init;
pub mod play;
pub mod selftest;
pub mod validate;
