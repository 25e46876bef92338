#![allow(dead_code)]

use alias_shortener::application::services::MappingService;
use alias_shortener::domain::entities::Mapping;
use alias_shortener::domain::repositories::MappingRepository;
use alias_shortener::error::AppError;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// HashMap-backed store used by the HTTP tests.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    mappings: Mutex<HashMap<String, Mapping>>,
}

impl InMemoryMappingRepository {
    pub fn len(&self) -> usize {
        self.mappings.lock().unwrap().len()
    }

    pub fn get(&self, alias: &str) -> Option<Mapping> {
        self.mappings.lock().unwrap().get(alias).cloned()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find(&self, alias: &str) -> Result<Option<Mapping>, AppError> {
        Ok(self.get(alias))
    }

    async fn exists(&self, alias: &str) -> Result<bool, AppError> {
        Ok(self.mappings.lock().unwrap().contains_key(alias))
    }

    async fn insert(&self, mapping: Mapping) -> Result<Mapping, AppError> {
        let mut mappings = self.mappings.lock().unwrap();
        if mappings.contains_key(&mapping.alias) {
            return Err(AppError::conflict(mapping.alias));
        }
        mappings.insert(mapping.alias.clone(), mapping.clone());
        Ok(mapping)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every call fails like an unreachable database.
pub struct UnavailableMappingRepository;

#[async_trait]
impl MappingRepository for UnavailableMappingRepository {
    async fn find(&self, _alias: &str) -> Result<Option<Mapping>, AppError> {
        Err(AppError::Store(sqlx::Error::PoolTimedOut))
    }

    async fn exists(&self, _alias: &str) -> Result<bool, AppError> {
        Err(AppError::Store(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _mapping: Mapping) -> Result<Mapping, AppError> {
        Err(AppError::Store(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Store(sqlx::Error::PoolTimedOut))
    }
}

pub fn create_test_state(
    base_url: Option<&str>,
) -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::default());
    let service = MappingService::new(repo.clone(), base_url.map(str::to_string));

    (AppState::new(Arc::new(service)), repo)
}

pub fn create_unavailable_state() -> AppState {
    let service = MappingService::new(Arc::new(UnavailableMappingRepository), None);
    AppState::new(Arc::new(service))
}
