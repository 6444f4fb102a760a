//! CLI Commands

pub mod card;
pub mod check;
pub mod init;

pub use card::CardCommand;
pub use check::CheckCommand;
pub use init::InitCommand;

use shared::AddressBookConfig;

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: AddressBookConfig,
    /// Print JSON instead of styled text
    pub json: bool,
}
