//! 分页列表：内存集合 + 分页状态

use crate::core::pagination::{
    ListenerId, NavAction, PageChangeEvent, Pagination,
};

/// 分页列表
///
/// 持有完整的数据集合，按当前页截取切片。修改每页条数、窗口大小或数据集合时
/// 都会回到第 1 页。
#[derive(Debug)]
pub struct PagedList<T> {
    items: Vec<T>,
    pagination: Pagination,
}

impl<T> PagedList<T> {
    /// 创建新的分页列表
    pub fn new(
        items: Vec<T>,
        page_size: u32,
        window_size: u32,
    ) -> Self {
        let total = count_of(&items);
        Self {
            items,
            pagination: Pagination::new(total, page_size, window_size),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    /// 获取每页条数
    pub fn page_size(&self) -> u32 {
        self.pagination.limit()
    }

    /// 替换数据集合并回到第一页
    pub fn set_items(&mut self, items: Vec<T>) {
        self.pagination.set_total(count_of(&items));
        self.items = items;
        self.pagination.set_page(1);
    }

    /// 更新每页条数
    pub fn set_page_size(&mut self, page_size: u32) {
        self.pagination.set_limit(page_size);
        self.pagination.set_page(1);
        self.pagination.refresh();
    }

    /// 更新当前页前后显示的页码数量
    pub fn set_window_size(&mut self, window_size: u32) {
        self.pagination.set_page(1);
        self.pagination.set_window_size(window_size);
        self.pagination.refresh();
    }

    /// 当前页第一条数据在集合中的偏移
    pub fn offset(&self) -> usize {
        let page = self.pagination.page() as usize;
        let limit = self.pagination.limit() as usize;
        page.saturating_sub(1).saturating_mul(limit)
    }

    /// 当前页的数据
    pub fn current_items(&self) -> &[T] {
        let start = self.offset().min(self.items.len());
        let end = start
            .saturating_add(self.pagination.limit() as usize)
            .min(self.items.len());
        &self.items[start..end]
    }

    /// 执行导航动作
    pub fn navigate(&mut self, action: NavAction) {
        self.pagination.apply(action);
    }

    pub fn add_page_change_listener<F>(
        &mut self,
        listener: F,
    ) -> ListenerId
    where
        F: FnMut(&PageChangeEvent) + 'static,
    {
        self.pagination.add_page_change_listener(listener)
    }

    pub fn remove_page_change_listener(
        &mut self,
        id: ListenerId,
    ) -> bool {
        self.pagination.remove_page_change_listener(id)
    }
}

fn count_of<T>(items: &[T]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}
