//! # Tabla Hash con Encadenamiento
//! src/scheduler/hash_table.rs
//!
//! Tabla hash de job ID a metadatos, con resolución de colisiones por
//! encadenamiento: las claves que caen en el mismo bucket forman una lista
//! enlazada. Cuando el factor de carga supera 0.75 la capacidad se duplica
//! y todas las entradas se rehashean. No hay camino de reducción: remover
//! entradas nunca encoge la tabla.

use serde::{Deserialize, Serialize};

use crate::scheduler::types::JobRecord;

/// Capacidad inicial de la tabla
pub const DEFAULT_CAPACITY: usize = 16;

/// Umbral de factor de carga que dispara el resize
const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Nodo de una cadena de colisiones
#[derive(Debug)]
struct HashNode {
    key: String,
    value: JobRecord,
    next: Option<Box<HashNode>>,
}

/// Tabla hash con encadenamiento para metadatos de jobs
#[derive(Debug)]
pub struct HashTable {
    capacity: usize,
    size: usize,
    buckets: Vec<Option<Box<HashNode>>>,
}

/// Estado serializable de la tabla (los pares no tienen orden garantizado)
#[derive(Debug, Serialize, Deserialize)]
pub struct HashTableState {
    pub capacity: usize,
    #[serde(default)]
    pub entries: Vec<(String, JobRecord)>,
}

impl Default for HashTableState {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            entries: Vec::new(),
        }
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Crea una tabla con la capacidad por defecto
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Crea una tabla con una capacidad inicial dada
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            size: 0,
            buckets: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Hash polinomial base 31 sobre los caracteres de la clave
    ///
    /// Reduce módulo la capacidad actual en cada paso, así que el índice
    /// depende de la capacidad y debe recomputarse tras cada resize.
    fn bucket_index(&self, key: &str) -> usize {
        let base: u64 = 31;
        let capacity = self.capacity as u64;
        let mut hash_value: u64 = 0;

        for ch in key.chars() {
            hash_value = (hash_value * base + ch as u64) % capacity;
        }

        hash_value as usize
    }

    /// Inserta un par clave-valor
    ///
    /// Si la clave ya existe, actualiza el valor en el mismo nodo de la
    /// cadena (conserva su posición). Si no, inserta un nodo nuevo al
    /// inicio del bucket. Tras insertar, duplica la capacidad si el factor
    /// de carga supera el umbral.
    pub fn insert(&mut self, key: &str, value: JobRecord) {
        let index = self.bucket_index(key);

        let mut current = self.buckets[index].as_mut();
        while let Some(node) = current {
            if node.key == key {
                node.value = value;
                return;
            }
            current = node.next.as_mut();
        }

        self.insert_new(key.to_string(), value);
    }

    /// Inserta un nodo nuevo al inicio de su bucket
    fn insert_new(&mut self, key: String, value: JobRecord) {
        let index = self.bucket_index(&key);
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(HashNode { key, value, next }));
        self.size += 1;

        if self.size as f64 > self.capacity as f64 * LOAD_FACTOR_THRESHOLD {
            self.resize();
        }
    }

    /// Busca el valor asociado a una clave
    ///
    /// O(1) caso promedio, O(largo de cadena) en el peor caso.
    pub fn search(&self, key: &str) -> Option<&JobRecord> {
        let index = self.bucket_index(key);
        let mut current = self.buckets[index].as_deref();

        while let Some(node) = current {
            if node.key == key {
                return Some(&node.value);
            }
            current = node.next.as_deref();
        }

        None
    }

    /// Remueve una clave de su cadena
    ///
    /// Retorna si hubo remoción. Remover nunca encoge la tabla.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.bucket_index(key);
        if Self::unlink(&mut self.buckets[index], key) {
            self.size -= 1;
            true
        } else {
            false
        }
    }

    /// Desengancha el nodo con la clave dada, re-apuntando el enlace del
    /// predecesor (o el bucket) a su sucesor
    fn unlink(link: &mut Option<Box<HashNode>>, key: &str) -> bool {
        let found_here = match link {
            Some(node) => node.key == key,
            None => return false,
        };

        if found_here {
            if let Some(node) = link.take() {
                *link = node.next;
            }
            true
        } else if let Some(node) = link {
            Self::unlink(&mut node.next, key)
        } else {
            false
        }
    }

    /// Duplica la capacidad y rehashea todas las entradas
    ///
    /// Los nodos se reinsertan al inicio de su bucket nuevo, por lo que el
    /// orden interno de cada cadena no se conserva (ningún caller lo
    /// observa).
    fn resize(&mut self) {
        let new_capacity = self.capacity * 2;
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| None).collect(),
        );
        self.capacity = new_capacity;
        self.size = 0;

        for bucket in old_buckets {
            let mut current = bucket;
            while let Some(mut node) = current {
                current = node.next.take();
                self.insert_new(node.key, node.value);
            }
        }
    }

    /// Retorna todas las claves, en orden de bucket y cadena
    pub fn get_all_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.size);
        for bucket in &self.buckets {
            let mut current = bucket.as_deref();
            while let Some(node) = current {
                keys.push(node.key.clone());
                current = node.next.as_deref();
            }
        }
        keys
    }

    /// Retorna todos los pares clave-valor, en orden de bucket y cadena
    pub fn entries(&self) -> Vec<(String, JobRecord)> {
        let mut entries = Vec::with_capacity(self.size);
        for bucket in &self.buckets {
            let mut current = bucket.as_deref();
            while let Some(node) = current {
                entries.push((node.key.clone(), node.value.clone()));
                current = node.next.as_deref();
            }
        }
        entries
    }

    /// Número de entradas en la tabla
    pub fn size(&self) -> usize {
        self.size
    }

    /// Capacidad actual (número de buckets)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Verifica si la tabla está vacía
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Serializa capacidad y pares clave-valor
    pub fn to_state(&self) -> HashTableState {
        HashTableState {
            capacity: self.capacity,
            entries: self.entries(),
        }
    }

    /// Restaura una tabla reinsertando cada par sobre la capacidad guardada
    ///
    /// Solo la equivalencia de lookups es observable; la distribución de
    /// buckets se recomputa al reinsertar.
    pub fn from_state(state: HashTableState) -> Self {
        let mut table = Self::with_capacity(state.capacity);
        for (key, value) in state.entries {
            table.insert(&key, value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::types::JobStatus;

    fn record(job_id: &str) -> JobRecord {
        JobRecord::pending(job_id, "2024-01-01 10:00:00".to_string())
    }

    #[test]
    fn test_insert_and_search() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));

        let found = table.search("job-1").unwrap();
        assert_eq!(found.job_id, "job-1");
        assert_eq!(found.status, JobStatus::Pending);
        assert!(table.search("job-2").is_none());
    }

    #[test]
    fn test_insert_overwrites_existing_key() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));

        let mut updated = record("job-1");
        updated.mark_completed("2024-01-01 11:00:00".to_string());
        table.insert("job-1", updated);

        assert_eq!(table.size(), 1);
        let found = table.search("job-1").unwrap();
        assert_eq!(found.status, JobStatus::Completed);
    }

    #[test]
    fn test_remove() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));
        table.insert("job-2", record("job-2"));

        assert!(table.remove("job-1"));
        assert_eq!(table.size(), 1);
        assert!(table.search("job-1").is_none());
        assert!(table.search("job-2").is_some());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));

        assert!(!table.remove("nonexistent"));
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn test_remove_from_middle_of_chain() {
        // "a" (97), "q" (113) y "A" (65) caen todas en el bucket 1
        // con capacidad 16, así que forman una sola cadena
        let mut table = HashTable::new();
        assert_eq!(table.bucket_index("a"), table.bucket_index("q"));
        assert_eq!(table.bucket_index("a"), table.bucket_index("A"));

        table.insert("a", record("a"));
        table.insert("q", record("q"));
        table.insert("A", record("A"));

        assert!(table.remove("q"));
        assert!(table.search("a").is_some());
        assert!(table.search("q").is_none());
        assert!(table.search("A").is_some());
    }

    #[test]
    fn test_is_empty() {
        let mut table = HashTable::new();
        assert!(table.is_empty());

        table.insert("job-1", record("job-1"));
        assert!(!table.is_empty());

        table.remove("job-1");
        assert!(table.is_empty());
    }

    #[test]
    fn test_get_all_keys() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));
        table.insert("job-2", record("job-2"));
        table.insert("job-3", record("job-3"));

        let mut keys = table.get_all_keys();
        keys.sort();
        assert_eq!(keys, vec!["job-1", "job-2", "job-3"]);
    }

    // ==================== Resize ====================

    #[test]
    fn test_resize_doubles_capacity_and_keeps_lookups() {
        let mut table = HashTable::new();
        assert_eq!(table.capacity(), 16);

        // La inserción 13 cruza el umbral: 13 > 16 * 0.75
        for i in 0..13 {
            let key = format!("job-{}", i);
            table.insert(&key, record(&key));
        }

        assert_eq!(table.capacity(), 32);
        assert_eq!(table.size(), 13);
        for i in 0..13 {
            let key = format!("job-{}", i);
            let found = table.search(&key).unwrap();
            assert_eq!(found.job_id, key);
        }
    }

    #[test]
    fn test_resize_below_threshold_does_not_trigger() {
        let mut table = HashTable::new();
        for i in 0..12 {
            let key = format!("job-{}", i);
            table.insert(&key, record(&key));
        }
        // 12 == 16 * 0.75 exacto: no supera el umbral
        assert_eq!(table.capacity(), 16);
    }

    #[test]
    fn test_lookups_survive_multiple_resizes() {
        let mut table = HashTable::with_capacity(2);
        for i in 0..50 {
            let key = format!("job-{}", i);
            table.insert(&key, record(&key));
        }

        assert_eq!(table.size(), 50);
        assert!(table.capacity() > 50);
        for i in 0..50 {
            let key = format!("job-{}", i);
            assert!(table.search(&key).is_some(), "missing key {}", key);
        }
    }

    // ==================== Hash ====================

    #[test]
    fn test_hash_in_range() {
        let table = HashTable::with_capacity(7);
        for key in ["a", "job-123", "", "ñandú", "zzzzzzzzzz"] {
            assert!(table.bucket_index(key) < 7);
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        let table = HashTable::new();
        assert_eq!(table.bucket_index("job-1"), table.bucket_index("job-1"));
    }

    // ==================== Serialización ====================

    #[test]
    fn test_state_round_trip() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));
        let mut done = record("job-2");
        done.mark_completed("2024-01-01 11:00:00".to_string());
        table.insert("job-2", done.clone());

        let state = table.to_state();
        assert_eq!(state.capacity, 16);
        assert_eq!(state.entries.len(), 2);

        let restored = HashTable::from_state(state);
        assert_eq!(restored.size(), 2);
        assert_eq!(restored.search("job-2"), Some(&done));
        assert!(restored.search("job-1").is_some());
    }

    #[test]
    fn test_state_default_is_empty_table() {
        let state = HashTableState::default();
        let table = HashTable::from_state(state);
        assert!(table.is_empty());
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_state_json_shape() {
        let mut table = HashTable::new();
        table.insert("job-1", record("job-1"));

        let json = serde_json::to_value(table.to_state()).unwrap();
        assert_eq!(json["capacity"], 16);
        assert_eq!(json["entries"][0][0], "job-1");
        assert_eq!(json["entries"][0][1]["status"], "pending");
    }
}
