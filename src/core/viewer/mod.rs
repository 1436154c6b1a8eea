//! 终端显示模块

pub mod pagination_bar;
pub mod terminal;
