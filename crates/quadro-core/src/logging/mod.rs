//! One-shot logging setup shared by binaries and tests.

mod init;

pub use init::init;
