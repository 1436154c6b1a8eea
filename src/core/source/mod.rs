//! 数据源模块

pub mod lines;
