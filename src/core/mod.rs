//! 核心模块

pub mod input;
pub mod paged;
pub mod pagination;
pub mod source;
pub mod viewer;
