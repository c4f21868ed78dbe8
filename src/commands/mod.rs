//! CLI command implementations.
//!
//! Available commands:
//! - **compute**: Calculate and render the footprint of a profile
//! - **validate**: Report every problem in a profile
//! - **init**: Write a sample profile to start from
//! - **options**: List accepted option values
//! - **receipts**: Fold receipt analyses into a profile's grocery fields

pub mod compute;
pub mod init;
pub mod options;
pub mod receipts;
pub mod validate;

pub use compute::{handle_compute, ComputeConfig};
pub use init::init_profile;
pub use options::list_options;
pub use receipts::{import_receipts, ReceiptsConfig};
pub use validate::validate_profile_file;
