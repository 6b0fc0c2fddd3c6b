//! The task store: sole owner and mutation gateway of the task collection.

use super::{
    observer::{ChangeCallback, ObserverRegistry, SubscriptionId},
    persistence_worker::{self, PersistenceHandle, PersistenceWorker},
};
use crate::task::{
    domain::{Status, Task, TaskChanges, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskPersistence, TaskPersistenceError},
    view::{SortOrder, StatusFilter, TaskView},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Errors returned by task store operations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Domain validation failed; nothing was changed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task with this identifier is held by the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A loaded snapshot holds the same identifier twice.
    #[error("duplicate task identifier in snapshot: {0}")]
    DuplicateTask(TaskId),

    /// Loading the initial snapshot failed.
    #[error(transparent)]
    Persistence(#[from] TaskPersistenceError),

    /// A thread panicked while holding the collection lock.
    #[error("task store lock poisoned")]
    LockPoisoned,
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative, ordered collection of tasks.
///
/// Mutations are serialised by a single lock, and readers always observe a
/// whole snapshot. After each committed mutation the store hands a snapshot
/// to the persistence worker (when one is attached) and then notifies
/// observers, outside the lock. Clones share the same collection.
///
/// An observer that captures a clone of the store keeps the store alive, so
/// dropping the caller's handle alone does not stop the persistence worker.
/// Call [`TaskStore::close`] to detach persistence and observers explicitly.
pub struct TaskStore<C>
where
    C: Clock + Send + Sync,
{
    inner: Arc<StoreInner>,
    clock: Arc<C>,
}

#[derive(Debug)]
struct StoreInner {
    tasks: RwLock<Vec<Task>>,
    observers: ObserverRegistry,
    persistence: Mutex<Option<PersistenceHandle>>,
}

impl<C> Clone for TaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> std::fmt::Debug for TaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C> TaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store without persistence.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::from_parts(Vec::new(), None, clock)
    }

    /// Creates a store holding `tasks`, without persistence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn with_tasks(tasks: Vec<Task>, clock: Arc<C>) -> TaskStoreResult<Self> {
        ensure_unique_ids(&tasks)?;
        Ok(Self::from_parts(tasks, None, clock))
    }

    /// Loads the collection from `persistence` and attaches a background
    /// worker that saves every later change.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when loading fails and
    /// [`TaskStoreError::DuplicateTask`] when the loaded snapshot repeats an
    /// identifier.
    pub async fn open<P>(
        persistence: Arc<P>,
        clock: Arc<C>,
    ) -> TaskStoreResult<(Self, PersistenceWorker)>
    where
        P: TaskPersistence + 'static,
    {
        let tasks = persistence.load().await?;
        ensure_unique_ids(&tasks)?;
        tracing::info!(task_count = tasks.len(), "task store opened from persistence");
        let (handle, worker) = persistence_worker::spawn(persistence);
        Ok((Self::from_parts(tasks, Some(handle), clock), worker))
    }

    fn from_parts(
        tasks: Vec<Task>,
        persistence: Option<PersistenceHandle>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                tasks: RwLock::new(tasks),
                observers: ObserverRegistry::default(),
                persistence: Mutex::new(persistence),
            }),
            clock,
        }
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] when the collection lock is
    /// poisoned.
    pub fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.read()?.clone())
    }

    /// Returns the task with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] when the collection lock is
    /// poisoned.
    pub fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.read()?.iter().find(|task| task.id() == id).cloned())
    }

    /// Returns the number of tasks held.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] when the collection lock is
    /// poisoned.
    pub fn len(&self) -> TaskStoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` when the store holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] when the collection lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskStoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Computes a view from one consistent snapshot of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] when the collection lock is
    /// poisoned.
    pub fn view(&self, filter: StatusFilter, sort: SortOrder) -> TaskStoreResult<TaskView> {
        Ok(TaskView::compute(&self.read()?, filter, sort))
    }

    /// Appends a new task.
    ///
    /// The title is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is blank, or
    /// [`TaskStoreError::LockPoisoned`] when the collection lock is poisoned.
    pub fn add(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
        status: Status,
    ) -> TaskStoreResult<Task> {
        let validated_title = TaskTitle::new(title)?;
        let task = Task::new(validated_title, description, due_date, status, &*self.clock);
        {
            let mut tasks = self.write()?;
            debug_assert!(
                tasks.iter().all(|existing| existing.id() != task.id()),
                "freshly generated task id collides with a stored task"
            );
            tasks.push(task.clone());
            self.persist(&tasks);
        }
        tracing::debug!(task_id = %task.id(), status = %task.status(), "task added");
        self.inner.observers.notify();
        Ok(task)
    }

    /// Applies `changes` to the task with `id`.
    ///
    /// The task keeps its position. A rejected change set leaves the task
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] for an unknown id,
    /// [`TaskStoreError::Domain`] when a new title is blank, or
    /// [`TaskStoreError::LockPoisoned`] when the collection lock is poisoned.
    pub fn update(&self, id: TaskId, changes: TaskChanges) -> TaskStoreResult<Task> {
        let updated = self.modify(id, |task, clock| task.apply(changes, clock))?;
        tracing::debug!(task_id = %id, "task updated");
        self.inner.observers.notify();
        Ok(updated)
    }

    /// Sets the status of the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] for an unknown id, or
    /// [`TaskStoreError::LockPoisoned`] when the collection lock is poisoned.
    pub fn set_status(&self, id: TaskId, status: Status) -> TaskStoreResult<Task> {
        let updated = self.modify(id, |task, clock| {
            task.set_status(status, clock);
            Ok(())
        })?;
        tracing::debug!(task_id = %id, %status, "task status changed");
        self.inner.observers.notify();
        Ok(updated)
    }

    /// Removes every task whose id is in `ids` and returns how many were
    /// removed.
    ///
    /// Unknown ids are ignored. Remaining tasks keep their relative order.
    /// Observers are only notified when something was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] when the collection lock is
    /// poisoned.
    pub fn remove(&self, ids: impl IntoIterator<Item = TaskId>) -> TaskStoreResult<usize> {
        let targets: HashSet<TaskId> = ids.into_iter().collect();
        if targets.is_empty() {
            return Ok(0);
        }
        let removed = {
            let mut tasks = self.write()?;
            let before = tasks.len();
            tasks.retain(|task| !targets.contains(&task.id()));
            let count = before - tasks.len();
            if count > 0 {
                self.persist(&tasks);
            }
            count
        };
        if removed > 0 {
            tracing::debug!(removed, "tasks removed");
            self.inner.observers.notify();
        }
        Ok(removed)
    }

    /// Registers `callback` to run after every committed mutation.
    ///
    /// Callbacks receive no payload; they re-read the store. They run on the
    /// mutating thread after the collection lock has been released.
    pub fn on_change(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let shared: ChangeCallback = Arc::new(callback);
        self.inner.observers.subscribe(shared)
    }

    /// Removes a registered observer. Returns `false` when `id` was not
    /// registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.observers.unsubscribe(id)
    }

    /// Detaches the persistence worker and every observer.
    ///
    /// The worker writes the last queued snapshot and exits, so
    /// [`PersistenceWorker::join`] completes even while observers held
    /// clones of this store. Later mutations still apply in memory but are
    /// neither persisted nor announced. Closing twice is a no-op.
    pub fn close(&self) {
        let detached = self
            .inner
            .persistence
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let observers = self.inner.observers.clear();
        tracing::debug!(
            persistence = detached.is_some(),
            observers,
            "task store closed"
        );
    }

    fn modify(
        &self,
        id: TaskId,
        edit: impl FnOnce(&mut Task, &C) -> Result<(), TaskDomainError>,
    ) -> TaskStoreResult<Task> {
        let mut tasks = self.write()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        edit(task, &*self.clock)?;
        let updated = task.clone();
        self.persist(&tasks);
        Ok(updated)
    }

    // Called with the write lock held so snapshots reach the worker in
    // commit order.
    fn persist(&self, tasks: &[Task]) {
        let persistence = self
            .inner
            .persistence
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = persistence.as_ref() {
            handle.submit(tasks.to_vec());
        }
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.inner
            .tasks
            .read()
            .map_err(|_| TaskStoreError::LockPoisoned)
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.inner
            .tasks
            .write()
            .map_err(|_| TaskStoreError::LockPoisoned)
    }
}

fn ensure_unique_ids(tasks: &[Task]) -> TaskStoreResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
    }
    Ok(())
}
