//! Kernel module - collaborators the facade depends on.

pub mod deps;
pub mod notifiers;
pub mod test_dependencies;
pub mod traits;

pub use deps::SupabaseAdapter;
pub use notifiers::{ChannelNotifier, TracingNotifier};
pub use test_dependencies::{Invocation, MockBackend, MockNotifier};
pub use traits::*;
