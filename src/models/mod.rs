pub mod catalog;
pub mod chat;
pub mod nutrition;

pub use catalog::*;
pub use chat::*;
pub use nutrition::*;
