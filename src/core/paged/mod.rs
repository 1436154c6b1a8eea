//! 分页列表模块

pub mod list;

pub use list::PagedList;
