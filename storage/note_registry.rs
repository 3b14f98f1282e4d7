use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::geometry::Coordinate;

/// 在某个位置发送的一条消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNote {
    pub location: Coordinate,
    pub message: String,
}

impl RouteNote {
    pub fn new(location: Coordinate, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

type NoteList = Arc<Mutex<Vec<RouteNote>>>;

/// 按位置索引的留言表，进程级共享，只追加不清理
///
/// 两级锁：外层 RwLock 管理位置 -> 留言列表，内层每个位置一把 Mutex。
/// “读取历史 + 追加”在同一位置的 Mutex 内完成，对该位置的其它调用者是原子的；
/// 不同位置之间互不阻塞。
#[derive(Debug, Default)]
pub struct NoteRegistry {
    locations: RwLock<HashMap<Coordinate, NoteList>>,
}

/// 留言表统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    pub locations: usize,
    pub notes: usize,
}

impl NoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    async fn get_or_create(&self, location: Coordinate) -> NoteList {
        {
            let locations = self.locations.read().await;
            if let Some(list) = locations.get(&location) {
                return Arc::clone(list);
            }
        }

        let mut locations = self.locations.write().await;
        // 双检查：等待写锁期间可能已有其它任务创建
        Arc::clone(locations.entry(location).or_default())
    }

    /// 返回该位置在本条留言之前的全部历史（按插入顺序），随后存入本条留言的副本。
    /// 本条留言不会出现在自己的返回结果里。
    pub async fn on_note(&self, note: &RouteNote) -> Vec<RouteNote> {
        let list = self.get_or_create(note.location).await;
        let mut notes = list.lock().await;
        let history = notes.clone();
        notes.push(note.clone());
        history
    }

    /// 某位置当前历史的只读快照
    pub async fn history(&self, location: Coordinate) -> Vec<RouteNote> {
        let list = {
            let locations = self.locations.read().await;
            match locations.get(&location) {
                Some(list) => Arc::clone(list),
                None => return Vec::new(),
            }
        };
        let notes = list.lock().await;
        notes.clone()
    }

    pub async fn stats(&self) -> RegistryStats {
        let locations = self.locations.read().await;
        let mut notes = 0;
        for list in locations.values() {
            notes += list.lock().await.len();
        }
        RegistryStats {
            locations: locations.len(),
            notes,
        }
    }
}
