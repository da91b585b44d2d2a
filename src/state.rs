use crate::storage::KeyValueStorage;
use crate::store::HabitStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

pub struct AppData {
    pub storage: KeyValueStorage,
    pub store: HabitStore,
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, storage: KeyValueStorage, store: HabitStore) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(AppData { storage, store })),
        }
    }
}
