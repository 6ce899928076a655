use fate_core::FateError;
use thiserror::Error;

use crate::SimState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] FateError),

    #[error("cannot {op} a simulation in state {state:?}")]
    InvalidState {
        op:    &'static str,
        state: SimState,
    },

    #[error("{0} worker panicked")]
    WorkerPanicked(&'static str),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
