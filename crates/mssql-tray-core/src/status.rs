/// Run-state of the monitored container as classified from a single probe.
///
/// The core compares these values for equality only; colors, labels and
/// other presentation concerns live in the binary crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    /// The container name appeared in the engine's running-container list.
    Running,
    /// The engine answered but did not list the container.
    Stopped,
    /// The engine could not be queried (missing binary, OS fault, timeout).
    Unknown,
}
