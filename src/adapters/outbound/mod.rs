/// Outbound adapters - Implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod network;
pub mod spdx;
