//! 分页栏渲染

use clap::ValueEnum;
use colored::*;
use serde::Deserialize;

use crate::core::pagination::Pagination;

/// 分页栏相对页面内容的位置
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BarLocation {
    Top,
    #[default]
    Bottom,
}

const FIRST: &str = "«";
const PREVIOUS: &str = "‹";
const NEXT: &str = "›";
const LAST: &str = "»";

/// 渲染分页栏
///
/// 形如 `« ‹ Page 3 4 [5] 6 7 of 10 › »`。不可用的箭头以空格占位，
/// 可见窗口覆盖整个集合时不显示箭头，总页数未知时返回空串。
pub fn render_bar(pagination: &Pagination, use_color: bool) -> String {
    if pagination.page_count() == 0 {
        return String::new();
    }

    let labels = pagination.labels();
    let mut tokens: Vec<String> = Vec::new();
    let with_arrows = pagination.has_pages();

    if with_arrows {
        tokens.push(arrow(FIRST, pagination.has_before(), use_color));
        tokens.push(arrow(PREVIOUS, pagination.has_before(), use_color));
    }

    tokens.push(labels.page_text.clone());
    for &page in pagination.visible_window() {
        tokens.push(page_button(
            page,
            pagination.is_current(page),
            use_color,
        ));
    }
    tokens.push(labels.of_text.clone());
    tokens.push(pagination.page_count().to_string());

    if with_arrows {
        tokens.push(arrow(NEXT, pagination.has_next(), use_color));
        tokens.push(arrow(LAST, pagination.has_next(), use_color));
    }

    tokens.join(" ")
}

/// 渲染状态行
pub fn render_status(pagination: &Pagination) -> String {
    format!(
        "第 {} 页 / 共 {} 页 (共 {} 条, 每页 {} 条, 窗口 ±{})",
        pagination.page(),
        pagination.page_count(),
        pagination.total(),
        pagination.limit(),
        pagination.window_size()
    )
}

fn arrow(symbol: &str, visible: bool, use_color: bool) -> String {
    if !visible {
        return " ".repeat(symbol.chars().count());
    }
    if use_color {
        symbol.bright_white().bold().to_string()
    } else {
        symbol.to_string()
    }
}

fn page_button(page: u32, current: bool, use_color: bool) -> String {
    match (current, use_color) {
        (true, true) => format!("[{}]", page)
            .on_bright_cyan()
            .black()
            .bold()
            .to_string(),
        (true, false) => format!("[{}]", page),
        (false, true) => page.to_string().bright_white().to_string(),
        (false, false) => page.to_string(),
    }
}
