use crate::csrf::CsrfTokenManager;
use crate::http::GlooTransport;
use std::rc::Rc;

/// Network-facing state shared by every page component through a context.
#[derive(Clone)]
pub struct AppServices {
    pub transport: Rc<GlooTransport>,
    pub csrf: Rc<CsrfTokenManager<GlooTransport>>,
}

impl AppServices {
    pub fn new(backend_url: &str) -> Self {
        let transport = Rc::new(GlooTransport::new(backend_url));
        let csrf = Rc::new(CsrfTokenManager::new(Rc::clone(&transport)));
        Self { transport, csrf }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport) && Rc::ptr_eq(&self.csrf, &other.csrf)
    }
}
