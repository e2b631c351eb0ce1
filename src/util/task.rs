use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Keyed background tasks. Spawning under an existing key aborts the
/// previous task, which gives debounce and poll loops their
/// cancel-on-supersede semantics.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key.to_string(), task) {
            handle.abort();
        }
    }

    /// Runs `fut` after `delay`, replacing any task already queued under
    /// `key`.
    pub fn spawn_after<F>(&mut self, key: &str, delay: Duration, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.spawn(
            key,
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                fut.await;
            }),
        );
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn spawn_after_replaces_pending_task_under_same_key() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut tasks = TaskManager::new();

        for _ in 0..3 {
            let fired = fired.clone();
            tasks.spawn_after("debounce", Duration::from_millis(20), async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn abort_cancels_pending_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut tasks = TaskManager::new();

        let fired_clone = fired.clone();
        tasks.spawn_after("debounce", Duration::from_millis(20), async move {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });
        tasks.abort("debounce");

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
