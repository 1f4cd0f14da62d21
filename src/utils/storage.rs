// ============================================================================
// STORAGE - Persistencia clave/valor del lado del cliente
// ============================================================================
// El core nunca toca localStorage directamente: todo pasa por la
// capability KeyValueStorage, así la sesión se puede probar sin navegador.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};

/// Acceso clave/valor a almacenamiento durable del cliente
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Guardar un valor serializable bajo una clave
pub fn save_to_storage<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set(key, &json)
}

/// Cargar un valor serializado; None si no existe o está corrupto
pub fn load_from_storage<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Option<T> {
    let json = storage.get(key)?;
    serde_json::from_str(&json).ok()
}

/// Implementación sobre window.localStorage
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn raw(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.raw().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = self.raw().ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Almacenamiento en memoria para tests y entornos sin navegador
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn round_trips_serialized_values() {
        let storage = MemoryStorage::new();
        save_to_storage(&storage, "sample", &Sample { value: 7 }).unwrap();
        let loaded: Option<Sample> = load_from_storage(&storage, "sample");
        assert_eq!(loaded, Some(Sample { value: 7 }));
    }

    #[test]
    fn corrupt_payload_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.set("sample", "{not json").unwrap();
        let loaded: Option<Sample> = load_from_storage(&storage, "sample");
        assert_eq!(loaded, None);
    }

    #[test]
    fn remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }
}
