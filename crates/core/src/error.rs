use thiserror::Error;

use crate::model::tracker::TrackerError;
use crate::model::truth::TruthError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Truth(#[from] TruthError),
}
