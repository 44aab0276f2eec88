//! # Sistema de Planificación de Tareas
//!
//! Implementa el planificador sobre tres estructuras de datos clásicas:
//!
//! - `queue`: cola FIFO de tareas pendientes
//! - `hash_table`: tabla hash con encadenamiento para metadatos de jobs
//! - `history`: lista enlazada simple con el historial de ejecución
//!
//! `manager` compone las tres y `storage` persiste el estado completo en
//! JSON después de cada mutación.

pub mod hash_table;
pub mod history;
pub mod manager;
pub mod queue;
pub mod storage;
pub mod types;

pub use hash_table::HashTable;
pub use history::HistoryLog;
pub use manager::{Scheduler, SchedulerState};
pub use queue::TaskQueue;
pub use storage::StateManager;
pub use types::{JobRecord, JobStatus};
