//! 全局点击监听器登记表
//!
//! 详情面板打开时登记一个“外部点击”监听器，关闭或被替换时注销。
//! 登记表显式持有所有存活的监听器，反复开关面板不会累积。

/// 监听器句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// 全局点击监听器登记表
#[derive(Debug, Default)]
pub struct ClickListeners {
    next_id: u64,
    active: Vec<ListenerId>,
}

impl ClickListeners {
    /// 登记新的监听器
    pub fn acquire(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push(id);
        log::trace!("click listener {id:?} registered");
        id
    }

    /// 注销监听器；重复注销返回 `false`
    pub fn release(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|&active| active != id);
        let released = self.active.len() != before;
        if released {
            log::trace!("click listener {id:?} released");
        }
        released
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.active.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
