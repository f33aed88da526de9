//! Car events.

use std::fmt;

use serde::Serialize;

/// Snapshot of the car state at the moment an event fired.
///
/// The same value is passed to every service subscribed to the channel the event was raised on. The snapshot does
/// not say which channel fired, services decide how to react from the fields alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CarEvent {
    /// Fuel level when the event fired. Zero or below means the tank is empty.
    pub fuel_level: i32,
    /// Odometer reading when the event fired.
    pub distance_traveled: u32,
}

impl CarEvent {
    /// Creates a new snapshot.
    pub fn new(fuel_level: i32, distance_traveled: u32) -> Self {
        Self {
            fuel_level,
            distance_traveled,
        }
    }

    /// Returns true if the tank was empty when the event fired.
    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel_level <= 0
    }
}

/// Broadcast channel of a car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    /// The tank was found empty at the start of a tick. Terminates the current drive.
    OutOfFuel,
    /// The car pulled over at a gas station and will be refueled after the handlers return.
    StoppedAtGasStation,
    /// The car broke down. Terminates the current drive.
    BrokenDown,
}

impl EventKind {
    /// All channels in the order services subscribe to them.
    pub const ALL: [EventKind; 3] = [
        EventKind::OutOfFuel,
        EventKind::StoppedAtGasStation,
        EventKind::BrokenDown,
    ];

    /// Returns true if raising this event ends the current drive.
    pub fn is_terminal(&self) -> bool {
        matches!(self, EventKind::OutOfFuel | EventKind::BrokenDown)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::OutOfFuel => "OutOfFuel",
            EventKind::StoppedAtGasStation => "StoppedAtGasStation",
            EventKind::BrokenDown => "BrokenDown",
        };
        f.write_str(name)
    }
}
