// src/application/ports/action.rs

/// Request-scoped object a responder is bound to.
///
/// Capabilities are exposed through the accessor methods; the defaults
/// report none.
pub trait Action: Send + 'static {
    fn as_paginated(&mut self) -> Option<&mut dyn HasPagination> {
        None
    }
}

impl Action for () {}

/// An action that can be told which page of results to produce.
pub trait HasPagination {
    fn set_page(&mut self, page: u64);

    fn set_page_size(&mut self, page_size: u64);
}
