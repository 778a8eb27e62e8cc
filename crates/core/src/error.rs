use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Uuid },

    /// Ad selection found zero eligible campaigns. Callers cannot tell
    /// whether targeting, the active window, or budget limits were the
    /// reason; all collapse into this one outcome.
    #[error("No available ads matching targeting or limits reached")]
    NoEligibleAds,

    /// The simulated day counter has never been set.
    #[error("Current date not found")]
    ClockUnset,

    /// Operating on an entity whose state forbids it, e.g. updating or
    /// re-deleting a soft-deleted campaign.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
