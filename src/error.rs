//! # Errores del Planificador
//! src/error.rs
//!
//! Taxonomía de errores del crate. La única operación que falla hacia el
//! caller es `dequeue` sobre una cola vacía; todo lo demás se representa
//! como `Option`/`bool` o se recupera localmente en la capa de persistencia.

use thiserror::Error;

/// Errores que pueden ocurrir dentro del planificador
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// Se intentó desencolar de una cola vacía
    #[error("cannot dequeue from an empty queue")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_message() {
        let err = SchedulerError::EmptyQueue;
        assert_eq!(err.to_string(), "cannot dequeue from an empty queue");
    }
}
