use std::sync::{Arc, Mutex, MutexGuard};

use super::model::{PageChange, PaginationModel};
use super::token::{NavIntent, PageToken};
use crate::utils::error::{PaginationError, Result};

/// One lock per model: navigation reads the current page and then writes it.
#[derive(Debug, Clone)]
pub struct SharedPaginationModel {
    inner: Arc<Mutex<PaginationModel>>,
}

impl SharedPaginationModel {
    pub fn new(model: PaginationModel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PaginationModel>> {
        self.inner.lock().map_err(|_| PaginationError::Poisoned)
    }

    /// Run `f` with exclusive access. The observer also runs under this lock,
    /// so it must not call back into the same handle.
    pub fn with<R>(&self, f: impl FnOnce(&mut PaginationModel) -> R) -> Result<R> {
        Ok(f(&mut *self.lock()?))
    }

    pub fn initialize(&self) -> Result<PageChange> {
        self.lock()?.initialize()
    }

    pub fn dispatch(&self, intent: NavIntent) -> Result<Option<PageChange>> {
        self.lock()?.dispatch(intent)
    }

    pub fn current_page(&self) -> Result<u64> {
        Ok(self.lock()?.current_page())
    }

    pub fn tokens(&self) -> Result<Vec<PageToken>> {
        Ok(self.lock()?.tokens())
    }
}
