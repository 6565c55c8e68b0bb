// src/application/queries/pages/service.rs
use std::sync::Arc;

use crate::domain::page::PageStore;

pub struct PageQueryService {
    pub(super) store: Arc<dyn PageStore>,
}

impl PageQueryService {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self { store }
    }
}
