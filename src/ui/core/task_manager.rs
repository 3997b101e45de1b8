use super::actions::Action;
use crate::analytics;
use crate::api::SentimentApi;
use crate::state::{AnalysisTicket, FetchTicket};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

/// Runs backend calls off the UI loop and reports results as [`Action`]s
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    health_poller: Option<TaskId>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                health_poller: None,
            },
            rx,
        )
    }

    fn spawn<F>(&mut self, description: String, future: F) -> TaskId
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        log::debug!("Spawning task #{}: {}", task_id, description);
        let task = BackgroundTask {
            id: task_id,
            handle: tokio::spawn(future),
            description,
            started_at: Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Fetch and enrich headlines for the ticket's language
    pub fn spawn_headlines_load(&mut self, api: Arc<dyn SentimentApi>, ticket: FetchTicket) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Loading headlines '{}'", ticket.language);

        self.spawn(description, async move {
            let snapshot = analytics::load_snapshot(api.as_ref(), &ticket.language, ticket.randomize).await;
            let _ = action_sender.send(Action::HeadlinesLoaded {
                generation: ticket.generation,
                snapshot,
            });
        })
    }

    /// Trigger ingestion, wait for it to settle, then reload randomized headlines
    pub fn spawn_refresh(&mut self, api: Arc<dyn SentimentApi>, ticket: FetchTicket, settle_delay: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Refreshing headlines '{}'", ticket.language);

        self.spawn(description, async move {
            let snapshot = analytics::refresh_snapshot(api.as_ref(), &ticket.language, settle_delay).await;
            let _ = action_sender.send(Action::HeadlinesLoaded {
                generation: ticket.generation,
                snapshot,
            });
        })
    }

    /// Classify free text from the tester view
    pub fn spawn_analysis(&mut self, api: Arc<dyn SentimentApi>, ticket: AnalysisTicket) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = "Analyzing text".to_string();

        self.spawn(description, async move {
            let result = api.analyze_sentiment(&ticket.text).await.map_err(|e| e.to_string());
            let _ = action_sender.send(Action::AnalysisCompleted {
                generation: ticket.generation,
                result,
            });
        })
    }

    /// Poll backend health immediately and then every `period` until the UI goes away
    pub fn spawn_health_poller(&mut self, api: Arc<dyn SentimentApi>, period: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = "Health poller".to_string();

        let task_id = self.spawn(description, async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let healthy = api.check_health().await;
                if action_sender.send(Action::HealthChecked(healthy)).is_err() {
                    break;
                }
            }
        });
        self.health_poller = Some(task_id);
        task_id
    }

    pub fn spawn_ingestion_status(&mut self, api: Arc<dyn SentimentApi>) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = "Loading ingestion status".to_string();

        self.spawn(description, async move {
            let status = api.ingestion_status().await;
            let _ = action_sender.send(Action::IngestionStatusLoaded(status));
        })
    }

    /// Drop bookkeeping for tasks that have finished; returns their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Task #{} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Active one-shot requests, not counting the health poller
    pub fn request_count(&self) -> usize {
        self.tasks.keys().filter(|id| Some(**id) != self.health_poller).count()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
