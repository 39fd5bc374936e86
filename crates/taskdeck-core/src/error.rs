use thiserror::Error;

use taskdeck_gateway::GatewayError;

use crate::form::FieldErrors;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Submit blocked by missing form fields. The local state is untouched.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Remote sync failed under an awaited policy. The local mutation has
    /// already committed and is not rolled back.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
