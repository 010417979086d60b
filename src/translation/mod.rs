pub mod cache;
pub mod client;
pub mod interface;

pub use cache::TranslatorCache;
pub use client::RemoteTranslationModelProvider;
