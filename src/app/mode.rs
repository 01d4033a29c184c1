/// Destructive actions that wait for a yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Remove,
    NewDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Command deck has focus
    Command,
    /// Word cursor over the document
    Reading,
    /// Ranked list of removed words
    Summary,
    Confirm(PendingAction),
    Quit,
}
