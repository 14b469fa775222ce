pub mod control;
pub mod event;
pub mod group;
pub mod node;
pub mod types;

pub use control::{ControlOverrides, Label, SelectableControl, resolve_control};
pub use event::{ActivateHandler, ChangeHandler, DispatchError, EventResult};
pub use group::{GroupOption, SelectableGroup};
pub use node::{Layout, Node};
pub use types::*;
