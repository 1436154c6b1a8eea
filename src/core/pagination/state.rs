//! 分页状态

use tracing::{debug, trace};

use super::derive::{self, Derived};
use super::events::{
    ListenerId, PageChangeEvent, PageChangeListeners, PAGE_CHANGE,
};

/// 显示文案，原样透传给渲染层
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub page_text: String,
    pub of_text: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            page_text: "Page".to_string(),
            of_text: "of".to_string(),
        }
    }
}

/// 分页状态
///
/// 数值输入中 0 表示未设置。每个 setter 返回旧值并同步重新派生，
/// 派生条件不满足时保留上一次的派生结果。
#[derive(Debug)]
pub struct Pagination {
    page: u32,
    limit: u32,
    total: u32,
    window_size: u32,
    labels: Labels,
    derived: Derived,
    listeners: PageChangeListeners,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            limit: 0,
            total: 0,
            window_size: 0,
            labels: Labels::default(),
            derived: Derived::default(),
            listeners: PageChangeListeners::default(),
        }
    }
}

impl Pagination {
    /// 创建新的分页状态，当前页为第 1 页
    pub fn new(
        total: u32,
        limit: u32,
        window_size: u32,
    ) -> Self {
        let mut pagination = Self {
            page: 1,
            limit,
            total,
            window_size,
            ..Self::default()
        };
        pagination.refresh();
        pagination
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// 获取总页数
    pub fn page_count(&self) -> u32 {
        self.derived.page_count
    }

    /// 获取可见页码窗口
    pub fn visible_window(&self) -> &[u32] {
        &self.derived.visible_window
    }

    pub fn has_before(&self) -> bool {
        self.derived.has_before
    }

    pub fn has_next(&self) -> bool {
        self.derived.has_next
    }

    pub fn has_pages(&self) -> bool {
        self.derived.has_pages
    }

    /// 窗口中的页码是否为当前页
    pub fn is_current(&self, page: u32) -> bool {
        page == self.page
    }

    /// 当前派生结果的快照
    pub fn snapshot(&self) -> Derived {
        self.derived.clone()
    }

    /// 设置数据总数
    pub fn set_total(&mut self, total: u32) -> u32 {
        let old = std::mem::replace(&mut self.total, total);
        self.refresh();
        old
    }

    /// 设置每页条数
    pub fn set_limit(&mut self, limit: u32) -> u32 {
        let old = std::mem::replace(&mut self.limit, limit);
        self.refresh();
        old
    }

    /// 设置当前页之前/之后显示的页码数量
    pub fn set_window_size(&mut self, window_size: u32) -> u32 {
        let old =
            std::mem::replace(&mut self.window_size, window_size);
        self.refresh();
        old
    }

    /// 设置当前页，无论页码是否变化都会触发页码变更通知
    pub fn set_page(&mut self, page: u32) -> u32 {
        let old_page = std::mem::replace(&mut self.page, page);
        self.refresh();

        debug!(
            event = PAGE_CHANGE,
            old_page,
            new_page = page,
            page_count = self.derived.page_count,
            "页码变更"
        );
        let event = PageChangeEvent {
            new_page: page,
            old_page,
            derived: self.snapshot(),
        };
        self.listeners.dispatch(&event);
        old_page
    }

    pub fn set_page_text(&mut self, page_text: impl Into<String>) {
        self.labels.page_text = page_text.into();
    }

    pub fn set_of_text(&mut self, of_text: impl Into<String>) {
        self.labels.of_text = of_text.into();
    }

    /// 同时设置两段显示文案
    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    /// 用当前输入重新派生，不修改页码、不触发通知
    pub fn refresh(&mut self) {
        match derive::derive(
            self.page,
            self.limit,
            self.total,
            self.window_size,
        ) {
            Some(derived) => self.derived = derived,
            None => {
                // 页码未设置时仍可更新总页数
                match derive::page_count(self.total, self.limit) {
                    Some(count) => {
                        self.derived.page_count = count;
                        trace!(page = self.page, "页码未设置，跳过窗口派生");
                    }
                    None => trace!(
                        limit = self.limit,
                        total = self.total,
                        "输入未设置，跳过派生"
                    ),
                }
            }
        }
    }

    /// 注册页码变更监听器
    pub fn add_page_change_listener<F>(
        &mut self,
        listener: F,
    ) -> ListenerId
    where
        F: FnMut(&PageChangeEvent) + 'static,
    {
        self.listeners.add(listener)
    }

    /// 注销页码变更监听器
    pub fn remove_page_change_listener(
        &mut self,
        id: ListenerId,
    ) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(
        pagination: &mut Pagination,
    ) -> Rc<RefCell<Vec<PageChangeEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        pagination.add_page_change_listener(move |e| {
            sink.borrow_mut().push(e.clone())
        });
        events
    }

    #[test]
    fn test_new_derives_immediately() {
        let pagination = Pagination::new(20, 2, 2);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_count(), 10);
        assert_eq!(pagination.visible_window(), &[1, 2, 3]);
        assert!(!pagination.has_before());
        assert!(pagination.has_next());
    }

    #[test]
    fn test_default_is_unset() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.page_count(), 0);
        assert!(pagination.visible_window().is_empty());
        assert_eq!(pagination.labels().page_text, "Page");
        assert_eq!(pagination.labels().of_text, "of");
    }

    #[test]
    fn test_setters_return_previous_value() {
        let mut pagination = Pagination::new(20, 2, 2);
        assert_eq!(pagination.set_total(30), 20);
        assert_eq!(pagination.set_limit(3), 2);
        assert_eq!(pagination.set_window_size(1), 2);
        assert_eq!(pagination.set_page(4), 1);
        assert_eq!(pagination.page_count(), 10);
        assert_eq!(pagination.visible_window(), &[3, 4, 5]);
    }

    #[test]
    fn test_zero_limit_keeps_cached_page_count() {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_page(5);
        pagination.set_limit(0);
        assert_eq!(pagination.page_count(), 10);
        assert_eq!(pagination.visible_window(), &[3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_zero_total_keeps_cached_page_count() {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_total(0);
        assert_eq!(pagination.page_count(), 10);
    }

    #[test]
    fn test_page_count_without_page() {
        let mut pagination = Pagination::default();
        pagination.set_total(21);
        assert_eq!(pagination.page_count(), 0);
        pagination.set_limit(2);
        assert_eq!(pagination.page_count(), 11);
        assert!(pagination.visible_window().is_empty());
    }

    #[test]
    fn test_out_of_range_page_is_tolerated() {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_page(11);
        assert_eq!(pagination.page(), 11);
        assert_eq!(pagination.visible_window(), &[9, 10]);
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_set_page_always_notifies() {
        let mut pagination = Pagination::new(20, 2, 2);
        let events = record(&mut pagination);

        pagination.set_page(3);
        pagination.set_page(3);

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!((events[0].old_page, events[0].new_page), (1, 3));
        assert_eq!((events[1].old_page, events[1].new_page), (3, 3));
    }

    #[test]
    fn test_notification_sees_updated_snapshot() {
        let mut pagination = Pagination::new(20, 2, 2);
        let events = record(&mut pagination);

        pagination.set_page(5);

        let events = events.borrow();
        assert_eq!(events[0].derived.visible_window, vec![3, 4, 5, 6, 7]);
        assert!(events[0].derived.has_before);
    }

    #[test]
    fn test_other_setters_do_not_notify() {
        let mut pagination = Pagination::new(20, 2, 2);
        let events = record(&mut pagination);

        pagination.set_total(40);
        pagination.set_limit(4);
        pagination.set_window_size(3);
        pagination.refresh();

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_window_size_rederives_window_only() {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_page(5);
        pagination.set_window_size(1);
        assert_eq!(pagination.page_count(), 10);
        assert_eq!(pagination.visible_window(), &[4, 5, 6]);
    }

    #[test]
    fn test_labels_are_opaque() {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_page_text("Seite");
        pagination.set_of_text("von");
        assert_eq!(pagination.labels().page_text, "Seite");
        assert_eq!(pagination.labels().of_text, "von");
        assert_eq!(pagination.page_count(), 10);
    }

    #[test]
    fn test_is_current() {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_page(4);
        assert!(pagination.is_current(4));
        assert!(!pagination.is_current(5));
    }
}
