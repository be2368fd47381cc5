//! Remote starter delegate playground
//!
//! One object (a person) holds an optional reference to another object (a
//! car) through a shared contract, and invokes a single operation on it
//! without ever learning the concrete type on the other end. That is the
//! whole delegate pattern; everything else here is wiring to make it
//! observable.
//!
//! # Core Concepts
//!
//! - [`RemoteStarter`]: the contract, one required `start()` operation
//! - [`Person`]: the holder, with a name and an optional non-owning binding
//! - [`Car`] / [`Motorcycle`] / [`Rocketship`]: interchangeable implementers
//! - [`RecordingStarter`]: an implementer that counts instead of printing
//!
//! # Example
//!
//! ```
//! use remote_starter::{Car, Person};
//! use std::sync::Arc;
//!
//! let mut janet = Person::new("Janet");
//! janet.press_starter(); // nothing bound, nothing happens
//!
//! janet.bind(Arc::new(Car));
//! janet.press_starter(); // prints "vroom vroom"
//! ```

pub mod api;
pub mod person;
pub mod test_harness;
pub mod vehicles;

pub use api::RemoteStarter;
pub use person::Person;
pub use vehicles::{Car, Motorcycle, Rocketship, VehicleError, VehicleKind};

/// Re-export test harness for external use
pub use test_harness::{run_scenario, RecordingStarter, ScenarioConfig, ScenarioReport};
