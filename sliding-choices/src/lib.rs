pub mod animation;
pub mod choices;
pub mod config;
pub mod event;
pub mod geometry;
pub mod hooks;
pub mod selection;
pub mod timer;
pub mod transitions;

pub use animation::{IndicatorAnimator, IndicatorFrame};
pub use choices::{ItemState, SlidingChoices};
pub use config::ChoicesConfig;
pub use event::ChoiceEvent;
pub use geometry::{Geometry, GeometryError, GeometrySource, GeometryTracker, LayoutSnapshot, Rect};
pub use hooks::{HookTable, ItemHooks};
pub use selection::{Announcement, Placement, RetractStep, Selection};
pub use timer::{TimerId, Timers};
pub use transitions::{Easing, TransitionConfig};
