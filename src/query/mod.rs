pub mod locate;
pub mod snap;

pub use locate::{LocateTriangle, LocatedTriangle};
pub use snap::{nearest_feature, resolve_placement, Placement};
