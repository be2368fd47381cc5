//! Remote starter contract
//!
//! Provides the [`RemoteStarter`] trait, the shared language between a
//! holder and whatever implementer answers the button press.

/// Capability contract for anything that can be started remotely
///
/// The holder never learns the concrete type behind the trait object. All it
/// knows is that pressing the button invokes [`start`](RemoteStarter::start);
/// what actually happens is entirely up to the implementer. A car, a
/// motorcycle, and a rocketship can all sit behind the same fob.
pub trait RemoteStarter {
    /// Perform the implementer's start action
    ///
    /// Takes no input and returns nothing. The contract defines no failure
    /// conditions; the whole effect is whatever the implementer makes
    /// observable.
    fn start(&self);
}
