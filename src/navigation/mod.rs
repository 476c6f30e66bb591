//! Coordinator layer.
//!
//! Screens never touch navigation directly: they raise pulse signals which
//! the embedding application turns into [`Route`]s and applies to a
//! [`NavigationStack`] through the owning [`Coordinator`].

mod coordinator;
mod route;
mod stack;

pub use coordinator::Coordinator;
pub use route::Route;
pub use stack::NavigationStack;
