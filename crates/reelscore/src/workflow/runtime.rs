use super::domain::{Transition, WorkflowError, WorkflowEvent};
use super::machine::RatingWorkflow;
use super::view::WorkflowView;
use crate::catalog::GenreCatalog;
use crate::provider::{MovieId, MovieProvider};
use crate::questions::QuestionBank;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const COMMAND_BUFFER: usize = 32;

type Reply = oneshot::Sender<Result<Transition, WorkflowError>>;

struct Command {
    event: WorkflowEvent,
    reply: Reply,
}

/// Owns a [`RatingWorkflow`] on a dedicated task. Events are applied one at a
/// time; detail lookups run beside it and re-enter as `DetailLoaded`.
#[derive(Debug)]
pub struct WorkflowRuntime {
    commands: mpsc::Sender<Command>,
    views: watch::Receiver<WorkflowView>,
    task: JoinHandle<()>,
}

impl WorkflowRuntime {
    pub fn spawn<P>(provider: Arc<P>, catalog: Arc<GenreCatalog>, bank: Arc<QuestionBank>) -> Self
    where
        P: MovieProvider + ?Sized + 'static,
    {
        let workflow = RatingWorkflow::new(catalog, bank);
        let (views_tx, views) = watch::channel(workflow.view());
        let (commands, commands_rx) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(run(workflow, provider, commands_rx, views_tx));

        Self {
            commands,
            views,
            task,
        }
    }

    /// Applies `event` and waits for the resulting transition.
    pub async fn dispatch(&self, event: WorkflowEvent) -> Result<Transition, WorkflowError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command { event, reply })
            .await
            .map_err(|_| WorkflowError::RuntimeClosed)?;
        response.await.map_err(|_| WorkflowError::RuntimeClosed)?
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowView> {
        self.views.clone()
    }

    pub fn view(&self) -> WorkflowView {
        self.views.borrow().clone()
    }

    /// Stops accepting events and waits for the event task to drain.
    pub async fn shutdown(self) {
        let Self { commands, task, .. } = self;
        drop(commands);
        if let Err(err) = task.await {
            warn!(error = %err, "rating workflow task ended abnormally");
        }
    }
}

async fn run<P>(
    mut workflow: RatingWorkflow,
    provider: Arc<P>,
    mut commands: mpsc::Receiver<Command>,
    views: watch::Sender<WorkflowView>,
) where
    P: MovieProvider + ?Sized + 'static,
{
    let (loaded_tx, mut loaded_rx) = mpsc::unbounded_channel();

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(Command { event, reply }) = command else {
                    break;
                };
                let result = step(&mut workflow, event, &views);
                if let Ok(Transition::FetchDetail(movie_id)) = &result {
                    spawn_detail_fetch(Arc::clone(&provider), *movie_id, loaded_tx.clone());
                }
                if reply.send(result).is_err() {
                    debug!("workflow caller went away before the reply");
                }
            }
            Some(event) = loaded_rx.recv() => {
                if let Err(err) = step(&mut workflow, event, &views) {
                    warn!(error = %err, "detail event rejected");
                }
            }
        }
    }

    debug!("rating workflow runtime stopped");
}

fn step(
    workflow: &mut RatingWorkflow,
    event: WorkflowEvent,
    views: &watch::Sender<WorkflowView>,
) -> Result<Transition, WorkflowError> {
    let name = event.name();
    let transition = workflow.apply(event)?;
    if transition != Transition::Unchanged {
        views.send_replace(workflow.view());
    }
    debug!(event = name, state = workflow.state().name(), "workflow event applied");
    Ok(transition)
}

fn spawn_detail_fetch<P>(
    provider: Arc<P>,
    movie_id: MovieId,
    loaded: mpsc::UnboundedSender<WorkflowEvent>,
) where
    P: MovieProvider + ?Sized + 'static,
{
    tokio::spawn(async move {
        let detail = match provider.detail(movie_id).await {
            Ok(detail) => Some(detail),
            Err(err) => {
                warn!(movie_id, code = err.code(), error = %err, "movie detail lookup failed");
                None
            }
        };
        // The runtime may already be gone; nothing is waiting for this detail then.
        let _ = loaded.send(WorkflowEvent::DetailLoaded { movie_id, detail });
    });
}
