/// Adapters layer - Infrastructure implementations of ports
///
/// Adapters translate between the application core and the outside
/// world: network services, the terminal, and the filesystem.
pub mod outbound;
