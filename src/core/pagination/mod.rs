//! 分页引擎

pub mod derive;
pub mod events;
pub mod navigation;
pub mod state;

pub use derive::Derived;
pub use events::{ListenerId, PageChangeEvent, PAGE_CHANGE};
pub use navigation::NavAction;
pub use state::{Labels, Pagination};
