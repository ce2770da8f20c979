pub mod amount;
pub mod list;
pub mod metadata;
