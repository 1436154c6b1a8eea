//! 导航操作
//!
//! 所有操作都经由 [`Pagination::set_page`]，因此都会重新派生并触发页码变更通知。

use super::state::Pagination;

/// 导航动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
    /// 跳转到指定页，不做范围校验
    ToPage(u32),
}

impl Pagination {
    /// 跳转到第一页
    pub fn go_first(&mut self) {
        self.set_page(1);
    }

    /// 上一页，最小为第 1 页
    pub fn go_previous(&mut self) {
        let page = self.page().saturating_sub(1).max(1);
        self.set_page(page);
    }

    /// 下一页，最大为总页数
    pub fn go_next(&mut self) {
        let page =
            self.page().saturating_add(1).min(self.page_count());
        self.set_page(page);
    }

    /// 跳转到最后一页
    pub fn go_last(&mut self) {
        let page = self.page_count();
        self.set_page(page);
    }

    /// 跳转到指定页，调用方保证页码位于可见窗口内
    pub fn go_to_page(&mut self, page: u32) {
        self.set_page(page);
    }

    /// 执行导航动作
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::First => self.go_first(),
            NavAction::Previous => self.go_previous(),
            NavAction::Next => self.go_next(),
            NavAction::Last => self.go_last(),
            NavAction::ToPage(page) => self.go_to_page(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pagination_at(page: u32) -> Pagination {
        let mut pagination = Pagination::new(20, 2, 2);
        pagination.set_page(page);
        pagination
    }

    fn record(pagination: &mut Pagination) -> Rc<RefCell<Vec<(u32, u32)>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        pagination.add_page_change_listener(move |e| {
            sink.borrow_mut().push((e.old_page, e.new_page))
        });
        events
    }

    #[test]
    fn test_go_first_is_idempotent() {
        let mut pagination = pagination_at(1);
        let events = record(&mut pagination);

        pagination.go_first();
        pagination.go_first();

        assert_eq!(pagination.page(), 1);
        assert_eq!(*events.borrow(), vec![(1, 1), (1, 1)]);
    }

    #[test]
    fn test_go_next_stops_at_last_page() {
        let mut pagination = pagination_at(10);
        let events = record(&mut pagination);

        pagination.go_next();

        assert_eq!(pagination.page(), 10);
        assert!(!pagination.has_next());
        assert_eq!(*events.borrow(), vec![(10, 10)]);
    }

    #[test]
    fn test_go_previous_stops_at_first_page() {
        let mut pagination = pagination_at(2);
        pagination.go_previous();
        assert_eq!(pagination.page(), 1);
        pagination.go_previous();
        assert_eq!(pagination.page(), 1);
        assert!(!pagination.has_before());
    }

    #[test]
    fn test_go_previous_from_unset_page() {
        let mut pagination = Pagination::default();
        pagination.go_previous();
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_go_last() {
        let mut pagination = pagination_at(3);
        pagination.go_last();
        assert_eq!(pagination.page(), 10);
        assert_eq!(pagination.visible_window(), &[8, 9, 10]);
    }

    #[test]
    fn test_go_next_clamps_out_of_range_page() {
        let mut pagination = pagination_at(14);
        pagination.go_next();
        assert_eq!(pagination.page(), 10);
    }

    #[test]
    fn test_go_to_page_is_unclamped() {
        let mut pagination = pagination_at(5);
        pagination.go_to_page(42);
        assert_eq!(pagination.page(), 42);
        assert!(pagination.visible_window().is_empty());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut pagination = pagination_at(5);
        pagination.apply(NavAction::Next);
        assert_eq!(pagination.page(), 6);
        pagination.apply(NavAction::Previous);
        assert_eq!(pagination.page(), 5);
        pagination.apply(NavAction::Last);
        assert_eq!(pagination.page(), 10);
        pagination.apply(NavAction::First);
        assert_eq!(pagination.page(), 1);
        pagination.apply(NavAction::ToPage(3));
        assert_eq!(pagination.page(), 3);
    }
}
