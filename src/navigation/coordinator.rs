use uuid::Uuid;

use super::route::Route;
use super::stack::NavigationStack;

/// Node of the coordinator tree.
///
/// Each screen flow is owned by one coordinator; a finished flow removes its
/// node (and every descendant) from the tree by id.
#[derive(Debug, Clone)]
pub struct Coordinator {
    id: Uuid,
    name: String,
    entry: Route,
    children: Vec<Coordinator>,
}

impl Coordinator {
    pub fn new(name: impl Into<String>, entry: Route) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            entry,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route shown when the flow starts.
    pub fn entry(&self) -> &Route {
        &self.entry
    }

    pub fn children(&self) -> &[Coordinator] {
        &self.children
    }

    /// Show the flow's entry route on `stack`.
    pub fn start(&self, stack: &mut NavigationStack) {
        tracing::debug!(coordinator = %self.name, id = %self.id, "Start");
        stack.navigate(self.entry.clone());
    }

    /// Attach a child flow and return its id.
    pub fn append_child(&mut self, child: Coordinator) -> Uuid {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Detach the node with `id` anywhere below this one.
    pub fn remove_child(&mut self, id: Uuid) -> Option<Coordinator> {
        if let Some(index) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(index));
        }
        self.children
            .iter_mut()
            .find_map(|child| child.remove_child(id))
    }

    /// A flow finished: detach it and undo what it showed on `stack`.
    pub fn did_finish(&mut self, id: Uuid, stack: &mut NavigationStack) -> Option<Coordinator> {
        let finished = self.remove_child(id)?;
        if finished.entry.is_modal() {
            stack.dismiss();
        } else if !finished.entry.is_tab() {
            stack.pop();
        }
        tracing::debug!(coordinator = %finished.name, id = %id, "Finished");
        Some(finished)
    }

    pub fn find(&self, id: Uuid) -> Option<&Coordinator> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Coordinator::node_count).sum::<usize>()
    }
}
