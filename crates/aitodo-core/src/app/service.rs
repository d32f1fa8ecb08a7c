//! TodoService - タスク操作（add / toggle / edit / delete / clear / filter / export）
//!
//! 操作の流れ: 検証 → (必要なら分類) → store の変更 → スナップショット保存 → イベント発行
//!
//! # 原子性
//! - 検証はすべて変更の前に行う。失敗した操作は store を一切変更しない
//! - 変更系は `&mut self` を取るので、操作の途中で別の操作が割り込むことはない
//! - 保存の失敗はエラーではなく `Durability::NotPersisted` として返す

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::classifier::{self, Suggestion};
use crate::domain::{
    Applied, Category, DomainEvent, Durability, FilterMode, Priority, TaskId, TaskRecord,
    TodoError,
};
use crate::ports::{Clock, EventSink, IdGenerator};
use crate::store::TaskStore;

use super::export;
use super::stats::TaskStats;

const EXTRA_ID_DRAWS: usize = 8;

pub struct TodoService {
    store: TaskStore,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    events: Box<dyn EventSink>,
}

impl TodoService {
    pub fn new(
        store: TaskStore,
        clock: Arc<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        events: Box<dyn EventSink>,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            events,
        }
    }

    // ========================================
    // Classifier
    // ========================================

    /// 現在のローカル時刻で `seed` を分類する
    pub fn suggest(&self, seed: &str) -> Suggestion {
        classifier::classify(seed, self.clock.local_hour())
    }

    // ========================================
    // Mutations
    // ========================================

    /// タスクを先頭に追加
    ///
    /// category / priority を省略した場合は `Other` / `normal`。
    ///
    /// # Errors
    /// - trim 後に空なら `TodoError::Validation`（store は変更しない）
    /// - 既存と重ならない ID が得られなければ `TodoError::IdExhausted`（store は変更しない）
    pub fn add_task(
        &mut self,
        raw_text: &str,
        category: Option<Category>,
        priority: Option<Priority>,
    ) -> Result<Applied<TaskId>, TodoError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(TodoError::Validation("cannot add an empty task".to_string()));
        }

        let id = self.fresh_id()?;
        let record = TaskRecord::new(
            id.clone(),
            text.to_string(),
            self.clock.now(),
            category.unwrap_or_default(),
            priority.unwrap_or_default(),
        );
        debug!(id = %id, category = %record.category, priority = %record.priority, "adding task");
        self.store.push_front(record);

        let durability = self.persist();
        self.events.emit(&DomainEvent::TaskAdded { id: id.clone() });
        Ok(Applied::new(id, durability))
    }

    /// 入力から category を自動判定して追加（priority 省略時は分類結果の priority）
    pub fn add_classified(
        &mut self,
        raw_text: &str,
        priority: Option<Priority>,
    ) -> Result<Applied<TaskId>, TodoError> {
        let category = classifier::auto_categorize(raw_text);
        let priority = priority.unwrap_or_else(|| classifier::detect_priority(raw_text.trim()));
        self.add_task(raw_text, Some(category), Some(priority))
    }

    /// 完了状態を反転し、新しい値を返す
    pub fn toggle_complete(&mut self, id: &TaskId) -> Result<Applied<bool>, TodoError> {
        let task = self
            .store
            .get_mut(id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))?;
        let completed = task.toggle();
        debug!(id = %id, completed, "toggled task");

        let durability = self.persist();
        self.events.emit(&DomainEvent::TaskToggled {
            id: id.clone(),
            completed,
        });
        Ok(Applied::new(completed, durability))
    }

    /// テキストを置き換える。変更した場合 `true`
    ///
    /// 空白だけの `new_text` は無視する（エラーにしない、保存もしない）。
    pub fn edit_text(&mut self, id: &TaskId, new_text: &str) -> Result<Applied<bool>, TodoError> {
        let task = self
            .store
            .get_mut(id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))?;

        let text = new_text.trim();
        if text.is_empty() {
            debug!(id = %id, "ignoring blank edit");
            return Ok(Applied::new(false, Durability::Unchanged));
        }
        task.set_text(text.to_string());

        let durability = self.persist();
        self.events.emit(&DomainEvent::TaskEdited { id: id.clone() });
        Ok(Applied::new(true, durability))
    }

    /// 現在のテキストで分類し直し、category / priority を更新する
    pub fn reclassify(
        &mut self,
        id: &TaskId,
    ) -> Result<Applied<(Category, Priority)>, TodoError> {
        let task = self
            .store
            .get_mut(id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))?;

        let category = classifier::auto_categorize(&task.text);
        let priority = classifier::detect_priority(&task.text);
        task.set_classification(category, priority);

        let durability = self.persist();
        self.events.emit(&DomainEvent::TaskEdited { id: id.clone() });
        Ok(Applied::new((category, priority), durability))
    }

    /// タスクを削除し、削除したレコードを返す
    pub fn delete_task(&mut self, id: &TaskId) -> Result<Applied<TaskRecord>, TodoError> {
        let removed = self
            .store
            .remove(id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))?;
        debug!(id = %id, "deleted task");

        let durability = self.persist();
        self.events.emit(&DomainEvent::TaskDeleted { id: id.clone() });
        Ok(Applied::new(removed, durability))
    }

    /// 完了済みをすべて削除し、件数を返す（0 件なら何もしない）
    pub fn clear_completed(&mut self) -> Applied<usize> {
        let removed = self.store.remove_where(|task| task.completed);
        if removed == 0 {
            return Applied::new(0, Durability::Unchanged);
        }
        debug!(removed, "cleared completed tasks");

        let durability = self.persist();
        self.events.emit(&DomainEvent::CompletedCleared { removed });
        Applied::new(removed, durability)
    }

    // ========================================
    // Queries
    // ========================================

    /// `mode`（"all" / "active" / "completed"）で絞り込んだビュー
    ///
    /// # Errors
    /// - 未知の mode は `TodoError::Validation`
    pub fn filter<'a>(
        &'a self,
        mode: &str,
    ) -> Result<impl Iterator<Item = &'a TaskRecord> + use<'a>, TodoError> {
        let mode = FilterMode::from_str(mode)?;
        Ok(self.filter_by(mode))
    }

    pub fn filter_by(&self, mode: FilterMode) -> impl Iterator<Item = &TaskRecord> + '_ {
        self.store.all().iter().filter(move |task| mode.matches(task))
    }

    pub fn all(&self) -> &[TaskRecord] {
        self.store.all()
    }

    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.store.get(id)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(self.store.all())
    }

    /// スナップショットと同じ形の JSON 文書
    pub fn export_snapshot(&self) -> Result<String, TodoError> {
        self.store.export_document()
    }

    /// 今日の日付（UTC）のファイル名で `dir` に書き出し、パスを返す
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, TodoError> {
        let document = self.export_snapshot()?;
        export::write_export(dir, self.clock.now().date_naive(), &document)
    }

    /// store に無い ID を引くまで生成器を呼ぶ
    ///
    /// 再起動した連番生成器のように既存 ID を返す生成器もあるので、
    /// 既存件数 + `EXTRA_ID_DRAWS` 回まで引き直す。
    fn fresh_id(&self) -> Result<TaskId, TodoError> {
        let attempts = self.store.len() + EXTRA_ID_DRAWS;
        for _ in 0..attempts {
            let id = self.ids.generate_task_id();
            if id.is_blank() || self.store.contains(&id) {
                debug!(id = %id, "generated id already taken, drawing again");
                continue;
            }
            return Ok(id);
        }
        Err(TodoError::IdExhausted { attempts })
    }

    fn persist(&self) -> Durability {
        match self.store.save() {
            Ok(()) => Durability::Persisted,
            Err(err) => {
                warn!(error = %err, "change kept in memory only");
                Durability::NotPersisted {
                    reason: err.to_string(),
                }
            }
        }
    }
}
