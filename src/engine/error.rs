use crate::input::LoadError;
use crate::notes::NoteError;
use crate::reading::SessionError;
use crate::report::ExportError;
use thiserror::Error;

/// Any failure an application-level operation can report.
///
/// All of these are recoverable: the app shows the message and the session
/// carries on with its state unchanged.
#[derive(Error, Debug)]
pub enum SnagError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Note(#[from] NoteError),

    #[error("No document loaded")]
    NoDocument,
}
