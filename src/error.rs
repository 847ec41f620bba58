use crate::model::{EventId, PanelId, PanelKind};

/// Reasons a dashboard mutation was refused. State is never changed when one is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("panel not found: {0}")]
    PanelNotFound(PanelId),
    #[error("event not found: {0}")]
    EventNotFound(EventId),
    #[error("unknown panel type: {0}")]
    UnknownPanelKey(String),
    #[error("panel type already open: {0:?}")]
    AlreadyOpen(PanelKind),
    #[error("panel {0} dropped onto itself")]
    SelfDrop(PanelId),
    #[error("column {0} out of range")]
    ColumnOutOfRange(usize),
    #[error("no more columns can be created")]
    ColumnsFull,
    #[error("the event needs a title")]
    EmptyTitle,
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
