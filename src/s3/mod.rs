pub mod error;
#[cfg(test)]
pub mod fake;
pub mod profiles;
#[allow(clippy::module_inception)]
pub mod s3;
pub mod storage;

pub use error::StorageError;
#[cfg(test)]
pub use fake::FakeStorage;
#[cfg(test)]
pub use profiles::Profile;
pub use profiles::Profiles;
pub use s3::S3Storage;
pub use storage::Storage;
