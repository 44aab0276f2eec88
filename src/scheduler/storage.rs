//! # Persistencia del Estado de la Aplicación
//! src/scheduler/storage.rs
//!
//! Guarda y restaura el estado completo del planificador en un archivo
//! JSON con un envelope de metadatos (timestamp de guardado y versión).
//! Todos los fallos de esta capa son no-fatales: la aplicación sigue
//! siendo usable sin estado persistido o con el archivo corrupto.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::clock::now_iso;
use crate::scheduler::manager::SchedulerState;

/// Nombre por defecto del archivo de estado
pub const DEFAULT_STATE_FILE: &str = "app_state.json";

/// Versión del formato persistido (la única que se escribe)
pub const STATE_VERSION: u32 = 1;

/// Gestor de persistencia del estado completo
pub struct StateManager {
    /// Ruta al archivo de estado
    path: String,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}

impl StateManager {
    /// Crea un gestor de estado sobre la ruta dada
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Ruta del archivo de estado
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Guarda el snapshot completo con su envelope de metadatos
    ///
    /// Escribe JSON indentado sobre un archivo temporal y luego renombra
    /// (atómico en sistemas Unix). Retorna si la escritura tuvo éxito;
    /// los fallos de I/O se reportan y nunca se propagan.
    pub fn save_state(&self, state: &SchedulerState) -> bool {
        let mut document = match serde_json::to_value(state) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Error saving application state: {}", e);
                return false;
            }
        };
        document["metadata"] = json!({
            "saved_at": now_iso(),
            "version": STATE_VERSION,
        });

        match self.write_document(&document) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Error saving application state: {}", e);
                false
            }
        }
    }

    /// Escritura atómica: archivo temporal primero, luego rename
    fn write_document(&self, document: &Value) -> std::io::Result<()> {
        let temp_path = format!("{}.tmp", self.path);
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, document)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Carga el documento de estado desde disco
    ///
    /// Retorna `None` si el archivo no existe (primer arranque), si el
    /// JSON no parsea o si el nivel superior no es un objeto; la
    /// corrupción se reporta pero no es fatal. La interpretación del
    /// envelope queda a cargo del caller.
    pub fn load_state(&self) -> Option<Value> {
        if !Path::new(&self.path).exists() {
            return None;
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error loading application state: {}", e);
                return None;
            }
        };

        let document: Value = match serde_json::from_reader(BufReader::new(file)) {
            Ok(value) => value,
            Err(_) => {
                eprintln!("State file {} is corrupted. Starting fresh.", self.path);
                return None;
            }
        };

        if !document.is_object() {
            eprintln!("State file {} is corrupted. Starting fresh.", self.path);
            return None;
        }

        Some(document)
    }
}
