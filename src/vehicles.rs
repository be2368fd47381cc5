//! Concrete starter implementations
//!
//! Three interchangeable implementers plus the [`VehicleKind`] selector the
//! demo binary picks them by. Each emits one fixed line on stdout per start;
//! none of them carry any state.

use crate::api::RemoteStarter;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Error from selecting a vehicle by name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VehicleError {
    /// Name did not match any known vehicle
    #[error("unknown vehicle kind: {0}")]
    UnknownKind(String),
}

/// Selector for the built-in implementers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Rocketship,
}

impl VehicleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Rocketship => "rocketship",
        }
    }

    /// Construct the matching implementer behind the contract
    pub fn build(self) -> Arc<dyn RemoteStarter> {
        match self {
            VehicleKind::Car => Arc::new(Car),
            VehicleKind::Motorcycle => Arc::new(Motorcycle),
            VehicleKind::Rocketship => Arc::new(Rocketship),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "motorcycle" => Ok(VehicleKind::Motorcycle),
            "rocketship" => Ok(VehicleKind::Rocketship),
            _ => Err(VehicleError::UnknownKind(s.to_string())),
        }
    }
}

/// The tutorial's canonical implementer
#[derive(Debug, Clone, Copy)]
pub struct Car;

impl RemoteStarter for Car {
    fn start(&self) {
        println!("vroom vroom");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Motorcycle;

impl RemoteStarter for Motorcycle {
    fn start(&self) {
        println!("brap brap");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rocketship;

impl RemoteStarter for Rocketship {
    fn start(&self) {
        println!("3... 2... 1... liftoff");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_as_str() {
        for kind in [
            VehicleKind::Car,
            VehicleKind::Motorcycle,
            VehicleKind::Rocketship,
        ] {
            assert_eq!(kind.as_str().parse::<VehicleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!("Car".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!(
            "ROCKETSHIP".parse::<VehicleKind>().unwrap(),
            VehicleKind::Rocketship
        );
    }

    #[test]
    fn kind_parse_rejects_unknown_names() {
        let err = "submarine".parse::<VehicleKind>().unwrap_err();
        assert_eq!(err, VehicleError::UnknownKind("submarine".to_string()));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(VehicleKind::Motorcycle.to_string(), "motorcycle");
    }
}
