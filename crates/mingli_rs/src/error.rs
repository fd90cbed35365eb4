//! Facade error type.

use mingli_calendar::CalendarError;
use mingli_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MingliError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
