//! # Task Scheduler
//! src/lib.rs
//!
//! Planificador de tareas en proceso que demuestra tres estructuras de
//! datos clásicas (cola FIFO, lista enlazada simple, tabla hash con
//! encadenamiento) con persistencia del estado completo en JSON después
//! de cada mutación.
//!
//! ## Arquitectura
//!
//! El crate está dividido en módulos especializados:
//! - `scheduler`: estructuras de datos, planificador y persistencia
//! - `config`: configuración vía CLI y variables de entorno
//! - `clock`: fuente de tiempo inyectable para tests deterministas
//! - `error`: taxonomía de errores del crate
//!
//! ## Ejemplo de uso
//!
//! ```
//! use task_scheduler::scheduler::{Scheduler, StateManager};
//!
//! # let _ = std::fs::remove_file("/tmp/doc_state.json");
//! let mut scheduler = Scheduler::new(StateManager::new("/tmp/doc_state.json"));
//! scheduler.load_state();
//!
//! scheduler.submit_task("job-1");
//! assert_eq!(scheduler.run_next_task().as_deref(), Some("job-1"));
//! # let _ = std::fs::remove_file("/tmp/doc_state.json");
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod scheduler;
