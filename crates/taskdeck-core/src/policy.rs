/// How a mutation's remote sync is driven.
///
/// The local mutation commits (and notifies) before the sync starts under
/// either policy; there is no rollback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Spawn the remote call in the background; a failure is logged and
    /// otherwise ignored. This is the shipped behavior.
    #[default]
    FireAndForget,
    /// Await the remote call and hand its error to the caller.
    Awaited,
}
