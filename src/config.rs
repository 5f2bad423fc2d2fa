// src/config.rs

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const BANK_PATH_VAR: &str = "QUIZ_BANK_PATH";
pub const RANDOM_SIZE_VAR: &str = "QUIZ_RANDOM_SIZE";
pub const DEFAULT_RANDOM_SIZE: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Banco YAML externo; si es `None` se usa el embebido.
    pub bank_path: Option<PathBuf>,
    /// Cuántas preguntas tiene la mezcla aleatoria.
    pub random_size: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_path: None,
            random_size: DEFAULT_RANDOM_SIZE,
        }
    }
}

impl QuizConfig {
    /// Lee la configuración de las variables de entorno.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Igual que `from_env`, pero con una fuente de variables inyectable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = QuizConfig::default();

        if let Some(path) = lookup(BANK_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.bank_path = Some(PathBuf::from(path.trim()));
        }

        if let Some(raw) = lookup(RANDOM_SIZE_VAR) {
            config.random_size = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: RANDOM_SIZE_VAR,
                        value: raw,
                    });
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_without_vars() {
        let config = QuizConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.random_size, 10);
    }

    #[test]
    fn reads_both_vars() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            (BANK_PATH_VAR, "bank.yaml"),
            (RANDOM_SIZE_VAR, " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.bank_path, Some(PathBuf::from("bank.yaml")));
        assert_eq!(config.random_size, 25);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        for bad in ["0", "-3", "diez"] {
            let err = QuizConfig::from_lookup(lookup_from(&[(RANDOM_SIZE_VAR, bad)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    var: RANDOM_SIZE_VAR,
                    value: bad.to_string()
                }
            );
        }
    }
}
