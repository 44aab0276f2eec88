//! # Historial de Ejecución (Lista Enlazada)
//! src/scheduler/history.rs
//!
//! Lista enlazada simple que guarda los jobs ejecutados, del más reciente
//! al más antiguo. Cada nodo es dueño del siguiente (`Option<Box<_>>`),
//! así que no hay ciclos posibles por construcción.

use serde::{Deserialize, Serialize};

use crate::clock::now_stamp;

/// Nodo de la lista de historial
#[derive(Debug)]
struct HistoryNode {
    job_id: String,
    timestamp: String,
    next: Option<Box<HistoryNode>>,
}

/// Historial de jobs ejecutados, más reciente primero
#[derive(Debug, Default)]
pub struct HistoryLog {
    head: Option<Box<HistoryNode>>,
    length: usize,
}

/// Estado serializable del historial (orden head-first)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default)]
    pub entries: Vec<(String, String)>,
}

impl HistoryLog {
    /// Crea un historial vacío
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Agrega un job al historial como nueva cabeza
    ///
    /// El orden lo define la inserción, no el valor del timestamp.
    /// Si no se provee timestamp se captura la hora actual.
    pub fn add_to_history(&mut self, job_id: &str, timestamp: Option<String>) {
        let timestamp = timestamp.unwrap_or_else(now_stamp);
        let node = Box::new(HistoryNode {
            job_id: job_id.to_string(),
            timestamp,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.length += 1;
    }

    /// Retorna hasta `n` entradas desde la cabeza (las más recientes)
    ///
    /// Nunca falla: para n = 0 o historial vacío retorna una lista vacía.
    pub fn get_last_n(&self, n: usize) -> Vec<(String, String)> {
        let mut result = Vec::new();
        let mut current = self.head.as_deref();

        while let Some(node) = current {
            if result.len() >= n {
                break;
            }
            result.push((node.job_id.clone(), node.timestamp.clone()));
            current = node.next.as_deref();
        }

        result
    }

    /// Retorna todas las entradas de la cabeza a la cola
    pub fn get_all(&self) -> Vec<(String, String)> {
        self.get_last_n(self.length)
    }

    /// Número de entradas, O(1) por contador mantenido
    pub fn size(&self) -> usize {
        self.length
    }

    /// Verifica si el historial está vacío
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Imprime el historial completo, más reciente primero
    pub fn display(&self) {
        if self.is_empty() {
            println!("History log is empty.");
            return;
        }

        println!("\n=== Job History ===");
        let mut current = self.head.as_deref();
        let mut index = 1;
        while let Some(node) = current {
            println!(
                "{}. Job ID: {} | Timestamp: {}",
                index, node.job_id, node.timestamp
            );
            current = node.next.as_deref();
            index += 1;
        }
        println!("{}", "=".repeat(50));
    }

    /// Serializa el historial en orden head-first
    pub fn to_state(&self) -> HistoryState {
        HistoryState {
            entries: self.get_all(),
        }
    }

    /// Restaura un historial desde su estado serializado
    ///
    /// La primera entrada serializada vuelve a ser la cabeza: la cadena se
    /// reconstruye en el mismo orden, sin re-invertir.
    pub fn from_state(state: HistoryState) -> Self {
        let mut log = Self::new();
        for (job_id, timestamp) in state.entries.into_iter().rev() {
            log.add_to_history(&job_id, Some(timestamp));
        }
        log
    }
}
