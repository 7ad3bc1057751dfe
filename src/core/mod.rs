pub mod clock;
pub mod forms;
pub mod lifecycle;
pub mod physics;
pub mod predict;
pub mod scene;
pub mod theme;
pub mod trail;

pub use clock::*;
pub use forms::*;
pub use lifecycle::*;
pub use predict::*;
pub use scene::*;
pub use theme::*;
pub use trail::*;
