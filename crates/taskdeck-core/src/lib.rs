mod error;
pub use error::CoreError;

mod policy;
pub use policy::SyncPolicy;

mod notify;
pub use notify::{Notice, Notifier, NullNotifier, TracingNotifier};

mod form;
pub use form::{Field, FieldErrors, accept, validate};

mod view;
pub use view::derive;

mod store;
pub use store::TaskStore;

mod session;
pub use session::{ModalMode, SubmitOutcome, TaskSession};

#[cfg(test)]
pub(crate) mod testing;
