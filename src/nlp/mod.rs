pub mod client;
pub mod interface;

pub use client::RemoteLanguageModelProvider;
pub use interface::{LanguageModelProvider, Token};
