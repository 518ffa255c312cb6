pub mod build_store;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod file;

pub use build_store::BuildStore;
pub use error::BuildStoreError;
#[cfg(test)]
pub use fake::FakeBuildStore;
pub use file::FileBuildStore;
