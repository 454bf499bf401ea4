pub mod settings;
pub mod skeleton;

pub use settings::AppConfig;
pub use skeleton::{find_in_skeleton, rlcs_seasons};
