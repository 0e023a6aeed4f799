// programs/stakevest/src/state/mod.rs
pub mod investment;
pub mod investor;
pub mod platform_config;
pub mod platform_state;
pub mod referral;
pub mod requests;

pub use investment::*;
pub use investor::*;
pub use platform_config::*;
pub use platform_state::*;
pub use referral::*;
pub use requests::*;
