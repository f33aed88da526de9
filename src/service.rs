//! Services observing a car.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::car::Car;
use crate::event::{CarEvent, EventKind};

/// Distance driven by a car after a gas station refuels it.
pub const REDRIVE_DISTANCE: u32 = 10;

/// Observer reacting to the events of a car.
///
/// The same handler is registered on every channel, so an implementation decides how to react from the event
/// fields and never from the channel the event was raised on.
pub trait Service {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Reacts to an event raised by the observed car.
    fn handle_event(&self, event: &CarEvent);
}

/// Registers the service on all channels of the car.
pub fn subscribe(car: &Car, service: &Rc<dyn Service>) {
    for kind in EventKind::ALL {
        car.add_handler(kind, service.clone());
    }
}

/// Removes the service from all channels of the car.
pub fn unsubscribe(car: &Car, service: &Rc<dyn Service>) {
    for kind in EventKind::ALL {
        car.remove_handler(kind, service);
    }
}

// Compares data pointers only, vtable pointers of the same type may differ between codegen units.
pub(crate) fn same_service(a: &Rc<dyn Service>, b: &Rc<dyn Service>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Reaction chosen by a service policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// The tow truck takes a car with an empty tank to the nearest gas station.
    TowToGasStation,
    /// The tow truck takes a car low on fuel to the service center.
    TowToServiceCenter,
    /// The tow truck helps the car on the road.
    RoadsideAssist {
        /// Odometer reading of the car.
        distance: u32,
    },
    /// The gas station refuels the car and sends it on.
    Refuel,
    /// The mechanic inspects the car.
    Inspect {
        /// Odometer reading of the car.
        distance: u32,
    },
}

impl Reaction {
    /// Returns the console line describing the reaction for the given car.
    pub fn describe(&self, car: &Car) -> String {
        match self {
            Reaction::TowToGasStation => format!("Tow truck will take car {} to the nearest gas station.", car),
            Reaction::TowToServiceCenter => format!("Tow truck will take car {} to the service center.", car),
            Reaction::RoadsideAssist { distance } => format!("Tow truck will help car {} at {} km.", car, distance),
            Reaction::Refuel => format!("Gas station will refuel car {}.", car),
            Reaction::Inspect { distance } => format!("Mechanic will inspect car {} at {} km.", car, distance),
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reaction::TowToGasStation => write!(f, "tow to gas station"),
            Reaction::TowToServiceCenter => write!(f, "tow to service center"),
            Reaction::RoadsideAssist { distance } => write!(f, "roadside assist at {} km", distance),
            Reaction::Refuel => write!(f, "refuel"),
            Reaction::Inspect { distance } => write!(f, "inspect at {} km", distance),
        }
    }
}

// Writes the reaction to the car transcript.
fn report(car: &Car, service: &dyn Service, reaction: Reaction) {
    crate::log_debug!(car, "{}: {}", service.name(), reaction);
    car.transcript().say(reaction.describe(car));
}

////////////////////////////////////////////////////////////////////////////////

/// Tow truck helping cars which ran dry, run low or pass a hundred kilometer mark.
pub struct TowTruck {
    car: Weak<Car>,
}

impl TowTruck {
    /// Creates a tow truck observing the car.
    pub fn new(car: &Rc<Car>) -> Self {
        Self {
            car: Rc::downgrade(car),
        }
    }

    /// Chooses the reaction to the event.
    pub fn policy(event: &CarEvent) -> Option<Reaction> {
        if event.fuel_level <= 0 {
            Some(Reaction::TowToGasStation)
        } else if event.fuel_level < 50 {
            Some(Reaction::TowToServiceCenter)
        } else if event.distance_traveled % 100 == 0 {
            Some(Reaction::RoadsideAssist {
                distance: event.distance_traveled,
            })
        } else {
            None
        }
    }
}

impl Service for TowTruck {
    fn name(&self) -> &str {
        "tow-truck"
    }

    fn handle_event(&self, event: &CarEvent) {
        let Some(car) = self.car.upgrade() else {
            return;
        };
        if let Some(reaction) = Self::policy(event) {
            report(&car, self, reaction);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Gas station refueling cars with an empty tank and sending them on for [`REDRIVE_DISTANCE`] more ticks.
pub struct GasStation {
    car: Weak<Car>,
}

impl GasStation {
    /// Creates a gas station observing the car.
    pub fn new(car: &Rc<Car>) -> Self {
        Self {
            car: Rc::downgrade(car),
        }
    }

    /// Chooses the reaction to the event.
    pub fn policy(event: &CarEvent) -> Option<Reaction> {
        event.is_out_of_fuel().then_some(Reaction::Refuel)
    }
}

impl Service for GasStation {
    fn name(&self) -> &str {
        "gas-station"
    }

    fn handle_event(&self, event: &CarEvent) {
        let Some(car) = self.car.upgrade() else {
            return;
        };
        if let Some(reaction) = Self::policy(event) {
            report(&car, self, reaction);
            car.refuel();
            // the remaining distance of the interrupted drive is not resumed
            car.drive(REDRIVE_DISTANCE);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Mechanic inspecting cars every fifty kilometers.
pub struct Mechanic {
    car: Weak<Car>,
}

impl Mechanic {
    /// Creates a mechanic observing the car.
    pub fn new(car: &Rc<Car>) -> Self {
        Self {
            car: Rc::downgrade(car),
        }
    }

    /// Chooses the reaction to the event.
    pub fn policy(event: &CarEvent) -> Option<Reaction> {
        (event.distance_traveled % 50 == 0).then_some(Reaction::Inspect {
            distance: event.distance_traveled,
        })
    }
}

impl Service for Mechanic {
    fn name(&self) -> &str {
        "mechanic"
    }

    fn handle_event(&self, event: &CarEvent) {
        let Some(car) = self.car.upgrade() else {
            return;
        };
        if let Some(reaction) = Self::policy(event) {
            report(&car, self, reaction);
        }
    }
}
