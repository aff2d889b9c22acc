pub mod bus;
pub mod config;
pub mod constants;
pub mod follower;
pub mod highlight;
pub mod nav;
pub mod orb;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod schedule;

pub use bus::{PageEvents, PointerMove, ScrollEvent};
pub use config::EffectsConfig;
pub use follower::Viewport;
pub use orb::TransformTarget;
pub use page::{ClassTarget, PageEffects, PageTargets};
pub use parallax::StyleRule;
pub use schedule::{FrameCallback, FrameScheduler};
