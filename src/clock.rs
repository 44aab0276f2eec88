//! # Fuente de Tiempo Inyectable
//! src/clock.rs
//!
//! Abstrae la lectura del reloj de pared para que los tests puedan usar
//! timestamps deterministas en lugar de depender de la hora actual.

use chrono::Local;

/// Proveedor de timestamps para el planificador
pub trait Clock {
    /// Timestamp legible con formato `YYYY-MM-DD HH:MM:SS`
    fn timestamp(&self) -> String;
}

/// Reloj de pared del sistema
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Timestamp actual con el formato estándar del planificador
pub fn now_stamp() -> String {
    SystemClock.timestamp()
}

/// Timestamp actual en formato ISO-8601 (para el envelope de persistencia)
pub fn now_iso() -> String {
    Local::now().to_rfc3339()
}

/// Reloj fijo para tests deterministas
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

#[cfg(test)]
impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_format() {
        let stamp = SystemClock.timestamp();
        // "YYYY-MM-DD HH:MM:SS" => 19 caracteres con separadores fijos
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[7..8], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn test_fixed_clock_returns_given_stamp() {
        let clock = FixedClock("2024-01-01 00:00:00".to_string());
        assert_eq!(clock.timestamp(), "2024-01-01 00:00:00");
        assert_eq!(clock.timestamp(), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_now_iso_is_rfc3339() {
        let iso = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&iso).is_ok());
    }
}
