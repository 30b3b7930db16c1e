// ABOUTME: Library crate for the panel-fetch client
// ABOUTME: Exposes the job lifecycle controller, panel API client, and view surface

pub mod controller;
pub mod error;
pub mod remote;
pub mod view;

pub use controller::{JobController, PollOutcome, State, DEFAULT_POLL_INTERVAL};
pub use error::PanelError;
pub use remote::{ApiClient, JobApi, JobRequest};
pub use view::{PanelView, TermView};
