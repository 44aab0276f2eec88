//! # Planificador de Tareas
//! src/scheduler/manager.rs
//!
//! Integra las tres estructuras de datos para gestionar el ciclo de vida
//! de los jobs:
//! - `TaskQueue`: tareas pendientes en orden FIFO
//! - `HashTable`: lookup O(1) de metadatos por job ID
//! - `HistoryLog`: historial de ejecución, más reciente primero
//!
//! Cada operación que muta el estado dispara un auto-guardado del snapshot
//! completo vía `StateManager`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::{Clock, SystemClock};
use crate::scheduler::hash_table::{HashTable, HashTableState};
use crate::scheduler::history::{HistoryLog, HistoryState};
use crate::scheduler::queue::{QueueState, TaskQueue};
use crate::scheduler::storage::StateManager;
use crate::scheduler::types::JobRecord;

/// Snapshot serializable del estado completo del planificador
///
/// `config` es un mapeo arbitrario, actualmente siempre vacío.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SchedulerState {
    #[serde(default)]
    pub queue: QueueState,

    #[serde(default)]
    pub hash_table: HashTableState,

    #[serde(default)]
    pub history: HistoryState,

    #[serde(default)]
    pub config: Map<String, Value>,
}

impl SchedulerState {
    /// Deserializa un snapshot campo por campo, de forma tolerante
    ///
    /// Cada sección ausente o con forma incorrecta cae a su valor vacío en
    /// lugar de invalidar el snapshot completo: un archivo con una tabla
    /// hash válida pero una cola corrupta restaura la tabla y deja la cola
    /// vacía.
    pub fn from_value(value: &Value) -> Self {
        Self {
            queue: Self::section(value, "queue"),
            hash_table: Self::section(value, "hash_table"),
            history: Self::section(value, "history"),
            config: Self::section(value, "config"),
        }
    }

    fn section<T: Default + for<'de> Deserialize<'de>>(value: &Value, key: &str) -> T {
        value
            .get(key)
            .cloned()
            .and_then(|section| serde_json::from_value(section).ok())
            .unwrap_or_default()
    }
}

/// Planificador de tareas con persistencia automática
pub struct Scheduler {
    /// Cola de tareas pendientes
    queue: TaskQueue,

    /// Índice de metadatos por job ID
    hash_table: HashTable,

    /// Historial de ejecución
    history: HistoryLog,

    /// Configuración arbitraria persistida con el snapshot
    config: Map<String, Value>,

    /// Persistencia del snapshot completo
    state_manager: StateManager,

    /// Fuente de tiempo inyectada
    clock: Box<dyn Clock>,
}

impl Scheduler {
    /// Crea un planificador vacío con el reloj del sistema
    pub fn new(state_manager: StateManager) -> Self {
        Self::with_clock(state_manager, Box::new(SystemClock))
    }

    /// Crea un planificador vacío con un reloj inyectado
    pub fn with_clock(state_manager: StateManager, clock: Box<dyn Clock>) -> Self {
        Self {
            queue: TaskQueue::new(),
            hash_table: HashTable::new(),
            history: HistoryLog::new(),
            config: Map::new(),
            state_manager,
            clock,
        }
    }

    /// Envía una tarea nueva al planificador
    ///
    /// Encola el job ID y registra sus metadatos en estado `pending`
    /// (sobrescribiendo cualquier registro previo con el mismo ID).
    pub fn submit_task(&mut self, job_id: &str) -> bool {
        self.queue.enqueue(job_id);

        let record = JobRecord::pending(job_id, self.clock.timestamp());
        self.hash_table.insert(job_id, record);

        self.auto_save();
        true
    }

    /// Ejecuta la siguiente tarea de la cola
    ///
    /// Retorna `None` si la cola está vacía (sin guardado). Si el registro
    /// del job fue removido antes de ejecutarse, el historial igual
    /// registra la ejecución: el historial es independiente de la tabla.
    pub fn run_next_task(&mut self) -> Option<String> {
        if self.queue.is_empty() {
            return None;
        }

        let job_id = self.queue.dequeue().ok()?;

        // Ejecución simulada (placeholder del efecto externo)
        println!("Executing task: {}", job_id);

        let now = self.clock.timestamp();
        if let Some(record) = self.hash_table.search(&job_id) {
            let mut record = record.clone();
            record.mark_completed(now.clone());
            self.hash_table.insert(&job_id, record);
        }

        self.history.add_to_history(&job_id, Some(now));

        self.auto_save();
        Some(job_id)
    }

    /// Ejecuta todas las tareas pendientes en orden FIFO
    ///
    /// Cada iteración auto-guarda (sin batching). Retorna cuántas tareas
    /// se ejecutaron.
    pub fn run_all(&mut self) -> usize {
        let mut count = 0;
        while self.run_next_task().is_some() {
            count += 1;
        }
        count
    }

    /// Busca los metadatos de un job por ID (lookup puro, sin mutación)
    pub fn find_job(&self, job_id: &str) -> Option<&JobRecord> {
        self.hash_table.search(job_id)
    }

    /// Remueve un job de la tabla hash
    ///
    /// No toca la cola: si el job sigue encolado, igual se ejecutará.
    /// Guarda solo si hubo remoción.
    pub fn remove_job(&mut self, job_id: &str) -> bool {
        let removed = self.hash_table.remove(job_id);
        if removed {
            self.auto_save();
        }
        removed
    }

    /// Número de tareas pendientes en la cola
    pub fn get_queue_size(&self) -> usize {
        self.queue.size()
    }

    /// Número de jobs registrados en la tabla hash
    pub fn get_job_count(&self) -> usize {
        self.hash_table.size()
    }

    /// Número de tareas en el historial
    pub fn get_history_size(&self) -> usize {
        self.history.size()
    }

    /// Últimas N tareas ejecutadas, más reciente primero
    pub fn get_last_n_tasks(&self, n: usize) -> Vec<(String, String)> {
        self.history.get_last_n(n)
    }

    /// Siguiente tarea a ejecutar, sin removerla
    pub fn peek_next(&self) -> Option<&str> {
        self.queue.peek()
    }

    /// Imprime el historial de ejecución completo
    pub fn display_history(&self) {
        self.history.display();
    }

    /// Imprime el estado de la cola de pendientes
    pub fn display_queue(&self) {
        if self.queue.is_empty() {
            println!("Queue is empty.");
            return;
        }

        println!("\n=== Pending Tasks Queue ===");
        println!("Queue size: {}", self.queue.size());
        if let Some(next) = self.queue.peek() {
            println!("Next task: {}", next);
        }
        println!("{}", "=".repeat(50));
    }

    /// Serializa el estado completo del planificador
    pub fn to_state(&self) -> SchedulerState {
        SchedulerState {
            queue: self.queue.to_state(),
            hash_table: self.hash_table.to_state(),
            history: self.history.to_state(),
            config: self.config.clone(),
        }
    }

    /// Restaura las tres estructuras y la config desde un snapshot
    pub fn restore(&mut self, state: SchedulerState) {
        self.queue = TaskQueue::from_state(state.queue);
        self.hash_table = HashTable::from_state(state.hash_table);
        self.history = HistoryLog::from_state(state.history);
        self.config = state.config;
    }

    /// Intenta cargar el estado persistido
    ///
    /// Retorna si había un snapshot usable. Sin snapshot (o con el archivo
    /// corrupto) el planificador conserva sus estructuras vacías.
    pub fn load_state(&mut self) -> bool {
        match self.state_manager.load_state() {
            Some(document) => {
                self.restore(SchedulerState::from_value(&document));
                true
            }
            None => false,
        }
    }

    /// Guarda el snapshot completo tras una mutación
    fn auto_save(&self) {
        // El StateManager ya reporta los fallos; la operación no se
        // propaga como error
        let _ = self.state_manager.save_state(&self.to_state());
    }
}
