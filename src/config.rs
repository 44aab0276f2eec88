//! # Configuración de la Aplicación
//! src/config.rs
//!
//! Este módulo define la configuración del planificador con soporte para
//! argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./task_scheduler --state-file ./data/app_state.json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! STATE_FILE=./data/app_state.json ./task_scheduler
//! ```

use clap::Parser;

use crate::scheduler::storage::DEFAULT_STATE_FILE;

/// Configuración del planificador de tareas
#[derive(Debug, Clone, Parser)]
#[command(name = "task_scheduler")]
#[command(about = "Planificador de tareas con cola FIFO, lista enlazada y tabla hash")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Ruta del archivo de persistencia del estado
    #[arg(long = "state-file", default_value = DEFAULT_STATE_FILE, env = "STATE_FILE")]
    pub state_file: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.state_file.trim().is_empty() {
            return Err("State file path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            state_file: DEFAULT_STATE_FILE.to_string(),
        }
    }
}
