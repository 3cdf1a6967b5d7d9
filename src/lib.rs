pub mod app;
pub mod dom;
pub mod language;
pub mod links;
pub mod models;
pub mod resolver;
pub mod storage;
pub mod sync;
pub mod url;

/// Fixed names shared by the URL contract and the persisted store
pub mod keys {
    /// Query-string key carrying the language through navigation
    pub const LANG_PARAM: &str = "lang";
    /// Key of the single persisted preference value
    pub const STORAGE_KEY: &str = "preferredLanguage";
}

// Re-export commonly used types
pub use app::LanguageSync;
pub use dom::{Dom, NodeId};
pub use language::Language;
pub use links::propagate;
pub use models::{Element, Page};
pub use resolver::resolve;
pub use storage::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use sync::apply;
pub use url::Url;
