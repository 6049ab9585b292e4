//! Rating workflow: selection, preview, weighted questioning and the final score.

mod cache;
mod domain;
mod machine;
mod runtime;
mod view;

pub use cache::DetailCache;
pub use domain::{
    RatingOutcome, RatingSession, Selection, Transition, WorkflowError, WorkflowEvent,
    WorkflowState,
};
pub use machine::RatingWorkflow;
pub use runtime::WorkflowRuntime;
pub use view::{PreviewView, QuestionProgress, WorkflowView};
