//! 分页引擎
//!
//! 由数据总数、每页条数、当前页与窗口大小派生总页数、可见页码窗口与边界标志，
//! 并提供首页/上一页/下一页/末页/跳页操作及页码变更通知。

pub mod app;
pub mod core;

pub use crate::core::paged::PagedList;
pub use crate::core::pagination::{
    Derived, Labels, ListenerId, NavAction, PageChangeEvent,
    Pagination,
};
