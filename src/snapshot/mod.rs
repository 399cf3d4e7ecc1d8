/*!
 * Snapshot Module
 * Host process-table access behind a provider trait
 */

pub mod system;
pub mod traits;
pub mod types;

pub use system::SystemProvider;
pub use traits::SnapshotProvider;
pub use types::ProcessSample;
