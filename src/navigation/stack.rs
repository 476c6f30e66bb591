use super::route::Route;

/// Push/pop stack with at most one modal presented on top.
///
/// The root is never popped; pushing a tab route replaces the whole stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    stack: Vec<Route>,
    presented: Option<Route>,
}

impl NavigationStack {
    pub fn new(root: Route) -> Self {
        Self {
            stack: vec![root],
            presented: None,
        }
    }

    /// Route the user currently sees.
    pub fn top(&self) -> &Route {
        match &self.presented {
            Some(modal) => modal,
            None => self.stack.last().unwrap_or(&Route::Home),
        }
    }

    pub fn root(&self) -> &Route {
        self.stack.first().unwrap_or(&Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn presented(&self) -> Option<&Route> {
        self.presented.as_ref()
    }

    /// Show `route` the way it is meant to be shown: modally, as a new tab
    /// root, or pushed.
    pub fn navigate(&mut self, route: Route) {
        if route.is_modal() {
            self.present(route);
        } else if route.is_tab() {
            self.set_root(route);
        } else {
            self.push(route);
        }
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(?route, depth = self.stack.len(), "Push");
        self.stack.push(route);
    }

    /// Pop the top route. The root stays.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop()
    }

    pub fn pop_to_root(&mut self) -> Vec<Route> {
        if self.stack.len() <= 1 {
            return Vec::new();
        }
        self.stack.split_off(1)
    }

    pub fn set_root(&mut self, root: Route) {
        self.stack.clear();
        self.stack.push(root);
        self.presented = None;
    }

    /// Present a modal, replacing any modal already shown.
    pub fn present(&mut self, route: Route) {
        tracing::debug!(?route, "Present");
        self.presented = Some(route);
    }

    pub fn dismiss(&mut self) -> Option<Route> {
        self.presented.take()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
