mod signature;
pub mod store;

pub use store::{CloudinaryAssetStore, CloudinaryCredentials};
