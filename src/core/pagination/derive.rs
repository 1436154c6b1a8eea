//! 分页派生计算
//!
//! 由 (page, limit, total, window_size) 四个输入计算总页数、可见页码窗口与
//! 边界标志。所有函数均为纯函数，不持有状态。

/// 派生结果快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derived {
    /// 总页数
    pub page_count: u32,
    /// 可见页码窗口（升序、连续）
    pub visible_window: Vec<u32>,
    /// 当前页之前是否还有页
    pub has_before: bool,
    /// 当前页之后是否还有页
    pub has_next: bool,
    /// 可见窗口是否小于整个集合
    pub has_pages: bool,
}

/// 计算总页数，limit 或 total 为 0 时不计算
pub fn page_count(total: u32, limit: u32) -> Option<u32> {
    if limit == 0 || total == 0 {
        return None;
    }
    Some(total.div_ceil(limit))
}

/// 窗口起始页码
pub fn first_index(page: u32, window_size: u32) -> u32 {
    page.saturating_sub(window_size).max(1)
}

/// 窗口结束页码，裁剪到总页数
pub fn last_index(
    page: u32,
    window_size: u32,
    page_count: u32,
) -> u32 {
    page.saturating_add(window_size).min(page_count)
}

/// 计算可见页码窗口
///
/// 当 `page` 超出 `page_count` 时窗口仍被裁剪到 `page_count`，
/// 此时窗口不一定包含 `page`。
pub fn visible_window(
    page: u32,
    window_size: u32,
    page_count: u32,
) -> Vec<u32> {
    let first = first_index(page, window_size);
    let last = last_index(page, window_size, page_count);
    (first..=last).collect()
}

/// 完整派生，任一输入为 0（未设置）时返回 `None`
pub fn derive(
    page: u32,
    limit: u32,
    total: u32,
    window_size: u32,
) -> Option<Derived> {
    if page == 0 {
        return None;
    }
    let page_count = page_count(total, limit)?;
    let visible_window =
        visible_window(page, window_size, page_count);
    let has_pages = visible_window.len() < total as usize;

    Some(Derived {
        page_count,
        visible_window,
        has_before: page > 1,
        has_next: page < page_count,
        has_pages,
    })
}
