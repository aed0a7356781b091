use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::components::LoadPlan;
use crate::resources::storage::{new_plan_id, PlanStore, StorageError};

/// On-disk layout: `{"plans": [LoadPlan, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub plans: Vec<LoadPlan>,
}

/// Plan store backed by a single pretty-printed JSON file.
///
/// Every operation reads the whole file; `append` rewrites it. A missing file
/// reads as an empty document. Within this process readers share a lock that
/// `append` holds exclusively for the whole read-modify-write; other processes
/// sharing the file are not coordinated.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        info!("Using plan store at {}", path.display());
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PlanDocument, StorageError> {
        let _guard = self.lock.read();
        self.read_document()
    }

    fn read_document(&self) -> Result<PlanDocument, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, treating as empty", self.path.display());
                Ok(PlanDocument::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, document: &PlanDocument) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PlanStore for JsonFileStore {
    fn append(&self, mut plan: LoadPlan) -> Result<String, StorageError> {
        let _guard = self.lock.write();

        let mut document = self.read_document()?;
        plan.id = new_plan_id();
        let id = plan.id.clone();
        document.plans.push(plan);
        self.save(&document)?;

        Ok(id)
    }

    fn list_by_user(&self, user: &str) -> Result<Vec<LoadPlan>, StorageError> {
        Ok(self
            .load()?
            .plans
            .into_iter()
            .filter(|p| p.user == user)
            .collect())
    }

    fn get(&self, id: &str) -> Result<Option<LoadPlan>, StorageError> {
        Ok(self.load()?.plans.into_iter().find(|p| p.id == id))
    }
}
