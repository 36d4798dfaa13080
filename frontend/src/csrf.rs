//! Single-slot cache for the anti-forgery token attached to mutating requests.
//!
//! The slot starts empty, is filled on the first [`CsrfTokenManager::acquire`],
//! and is cleared by [`CsrfTokenManager::invalidate`] after the server rejects a
//! request or after a successful submission. Two overlapping `acquire` calls on
//! an empty slot may both fetch; the later answer simply overwrites the earlier.

use crate::config::CSRF_TOKEN_PATH;
use crate::http::{get_json, Transport};
use crate::models::CsrfTokenResponse;
use std::cell::RefCell;
use std::rc::Rc;

pub struct CsrfTokenManager<T> {
    transport: Rc<T>,
    token: RefCell<Option<String>>,
}

impl<T: Transport> CsrfTokenManager<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self {
            transport,
            token: RefCell::new(None),
        }
    }

    /// Cached token, or a freshly fetched one. `None` when the fetch fails.
    pub async fn acquire(&self) -> Option<String> {
        if let Some(token) = self.token.borrow().as_ref() {
            return Some(token.clone());
        }

        match get_json::<T, CsrfTokenResponse>(&self.transport, CSRF_TOKEN_PATH).await {
            Ok(response) => {
                *self.token.borrow_mut() = Some(response.csrf_token.clone());
                Some(response.csrf_token)
            }
            Err(e) => {
                log::error!("Failed to fetch CSRF token: {}", e);
                None
            }
        }
    }

    pub fn invalidate(&self) {
        self.token.borrow_mut().take();
    }

    #[cfg(test)]
    pub fn cached(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}
