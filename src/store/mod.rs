pub mod activities_store;

pub use activities_store::{ActivityDirectory, DirectoryError, SharedDirectory};
