/// Side effects requested by the handler and carried out by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write the current word list to storage.
    PersistWords,
    Quit,
}
