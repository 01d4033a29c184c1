pub mod app;
#[cfg(test)]
mod app_tests;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::{App, Notice, NoticeLevel};
pub use event::AppEvent;
pub use mode::{AppMode, PendingAction};
pub use render_state::{RenderState, RenderToken};
