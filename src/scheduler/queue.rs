//! # Cola FIFO de Tareas Pendientes
//! src/scheduler/queue.rs
//!
//! Cola FIFO de job IDs. Es la fuente de verdad del orden de ejecución:
//! remover un job de la tabla hash no lo saca de la cola.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// Cola FIFO de job IDs pendientes
#[derive(Debug, Default)]
pub struct TaskQueue {
    items: VecDeque<String>,
}

/// Estado serializable de la cola
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QueueState {
    #[serde(default)]
    pub items: Vec<String>,
}

impl TaskQueue {
    /// Crea una cola vacía
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Agrega un item al final de la cola
    pub fn enqueue(&mut self, item: &str) {
        self.items.push_back(item.to_string());
    }

    /// Remueve y retorna el item al frente de la cola (orden FIFO)
    ///
    /// El caller debe verificar `is_empty()` primero o manejar el error.
    pub fn dequeue(&mut self) -> Result<String> {
        self.items.pop_front().ok_or(SchedulerError::EmptyQueue)
    }

    /// Retorna el item al frente sin removerlo
    pub fn peek(&self) -> Option<&str> {
        self.items.front().map(|item| item.as_str())
    }

    /// Verifica si la cola está vacía
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Número de items en la cola
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Serializa el estado de la cola
    pub fn to_state(&self) -> QueueState {
        QueueState {
            items: self.items.iter().cloned().collect(),
        }
    }

    /// Restaura una cola desde su estado serializado
    ///
    /// Un campo `items` ausente o con tipo incorrecto se trata como una
    /// secuencia vacía (el fallback al default ocurre en la capa superior
    /// al deserializar el snapshot campo por campo).
    pub fn from_state(state: QueueState) -> Self {
        Self {
            items: state.items.into(),
        }
    }
}
