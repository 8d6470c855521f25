mod alert_dispatcher;
mod language_map;

pub use alert_dispatcher::{AlertDispatcher, DispatchReport};
pub use language_map::LanguageMap;
