pub mod bot_wallet;
pub mod copy_trading;
pub mod statistics;
pub mod timestamp;
pub mod tracked_wallet;
pub mod user;

pub use bot_wallet::*;
pub use copy_trading::*;
pub use statistics::*;
pub use timestamp::parse_timestamp;
pub use tracked_wallet::*;
pub use user::*;
