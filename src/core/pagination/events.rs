//! 页码变更通知

use std::fmt;

use super::derive::Derived;

/// 页码变更事件名
pub const PAGE_CHANGE: &str = "page-change";

/// 页码变更事件
///
/// 每次设置页码都会触发，即使新旧页码相同。`derived` 为派生完成后的快照。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChangeEvent {
    pub new_page: u32,
    pub old_page: u32,
    pub derived: Derived,
}

impl PageChangeEvent {
    /// 页码是否真正发生了变化
    pub fn is_changed(&self) -> bool {
        self.new_page != self.old_page
    }
}

/// 监听器注册标识，用于注销
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&PageChangeEvent)>;

/// 页码变更监听器列表，按注册顺序分发
#[derive(Default)]
pub struct PageChangeListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

impl PageChangeListeners {
    /// 注册监听器
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PageChangeEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// 注销监听器，返回是否找到
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 同步分发事件
    pub fn dispatch(&mut self, event: &PageChangeEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for PageChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageChangeListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
