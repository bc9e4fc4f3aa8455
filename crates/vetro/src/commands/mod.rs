pub mod active;
pub mod at;
pub mod cursor;
pub mod find;
pub mod init;
pub mod list;
pub mod output;
pub mod window;
