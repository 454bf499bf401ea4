pub mod dates;
pub mod models;
mod progress;
pub mod region;

pub use models::*;
pub use progress::ReconcileProgress;
pub use region::{INFERABLE_REGIONS, Region, region_from_display_name, region_in_text};
