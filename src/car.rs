//! Simulated car.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::event::{CarEvent, EventKind};
use crate::random::RandomSource;
use crate::service::{same_service, Service};
use crate::transcript::Transcript;
use crate::{log_debug, log_info, log_trace, log_warn};

/// Fuel level of a new or refueled car.
pub const FULL_TANK: i32 = 100;
/// Range of fuel consumed per tick.
pub const CONSUMPTION: Range<i32> = 5..15;
/// Range of the breakdown and gas station draws.
pub const CHANCE: Range<i32> = 1..100;
/// The car breaks down when the breakdown draw is below this value.
pub const BREAKDOWN_THRESHOLD: i32 = 5;
/// The car stops at a gas station when the gas station draw is below this value.
pub const GAS_STATION_THRESHOLD: i32 = 10;

/// How a call to [`Car::drive`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveOutcome {
    /// All requested ticks were processed.
    Completed,
    /// The tank was empty at the start of a tick.
    OutOfFuel(CarEvent),
    /// The car broke down.
    BrokenDown(CarEvent),
}

#[derive(Clone, Copy)]
struct CarState {
    fuel_level: i32,
    distance_traveled: u32,
}

/// A car which consumes fuel while driving and raises events observed by services.
///
/// All methods take `&self`, so a service reacting to an event can call back into the car, including a nested
/// [`drive`](Car::drive). No internal borrow is held while handlers run.
pub struct Car {
    brand: String,
    state: Cell<CarState>,
    depth: Cell<usize>,
    rand: RefCell<Box<dyn RandomSource>>,
    handlers: RefCell<FxHashMap<EventKind, Vec<Rc<dyn Service>>>>,
    transcript: Transcript,
}

impl Car {
    /// Creates a car with a full tank and zero distance.
    pub fn new(brand: &str, rand: impl RandomSource + 'static, transcript: Transcript) -> Self {
        Self {
            brand: brand.to_string(),
            state: Cell::new(CarState {
                fuel_level: FULL_TANK,
                distance_traveled: 0,
            }),
            depth: Cell::new(0),
            rand: RefCell::new(Box::new(rand)),
            handlers: RefCell::new(FxHashMap::default()),
            transcript,
        }
    }

    /// Returns the brand of the car.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the current fuel level.
    pub fn fuel_level(&self) -> i32 {
        self.state.get().fuel_level
    }

    /// Returns the distance traveled so far.
    pub fn distance_traveled(&self) -> u32 {
        self.state.get().distance_traveled
    }

    /// Returns the transcript the car and its services write to.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the snapshot of the current state.
    pub fn snapshot(&self) -> CarEvent {
        let state = self.state.get();
        CarEvent::new(state.fuel_level, state.distance_traveled)
    }

    /// Fills the tank.
    pub fn refuel(&self) {
        let mut state = self.state.get();
        state.fuel_level = FULL_TANK;
        self.state.set(state);
        log_info!(self, "refueled to {}", FULL_TANK);
    }

    /// Registers a handler on the given channel. Handlers are invoked in registration order.
    pub fn add_handler(&self, kind: EventKind, handler: Rc<dyn Service>) {
        log_debug!(self, "{} subscribed to {}", handler.name(), kind);
        self.handlers.borrow_mut().entry(kind).or_default().push(handler);
    }

    /// Removes the handler from the given channel. Returns false if it was not registered there.
    pub fn remove_handler(&self, kind: EventKind, handler: &Rc<dyn Service>) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let Some(list) = handlers.get_mut(&kind) else {
            return false;
        };
        match list.iter().position(|h| same_service(h, handler)) {
            Some(pos) => {
                list.remove(pos);
                log_debug!(self, "{} unsubscribed from {}", handler.name(), kind);
                true
            }
            None => false,
        }
    }

    /// Returns the number of handlers registered on the given channel.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.borrow().get(&kind).map_or(0, Vec::len)
    }

    /// Drives the car for up to `distance` ticks.
    ///
    /// Each tick first checks the tank and raises [`EventKind::OutOfFuel`] if it is empty, then consumes fuel,
    /// advances the odometer by one and draws whether the car breaks down ([`EventKind::BrokenDown`]) or stops at a
    /// gas station ([`EventKind::StoppedAtGasStation`]). Both terminal events end the call. After a gas station stop
    /// the tank is filled and driving continues.
    ///
    /// Handlers may call `drive` again. Such nested calls run on the same call stack and are not limited in depth.
    pub fn drive(&self, distance: u32) -> DriveOutcome {
        let depth = self.depth.get() + 1;
        self.depth.set(depth);
        log_debug!(self, "drive {} km (depth {})", distance, depth);
        let outcome = self.run_ticks(distance);
        log_debug!(self, "drive at depth {} ended: {:?}", depth, outcome);
        self.depth.set(depth - 1);
        outcome
    }

    fn run_ticks(&self, distance: u32) -> DriveOutcome {
        for _ in 0..distance {
            if self.fuel_level() <= 0 {
                let event = self.snapshot();
                self.emit(EventKind::OutOfFuel, event);
                return DriveOutcome::OutOfFuel(event);
            }

            let consumed = self.draw(CONSUMPTION);
            let mut state = self.state.get();
            state.fuel_level -= consumed;
            state.distance_traveled += 1;
            self.state.set(state);
            log_trace!(self, "consumed {}, fuel {}", consumed, state.fuel_level);

            if self.draw(CHANCE) < BREAKDOWN_THRESHOLD {
                let event = self.snapshot();
                self.emit(EventKind::BrokenDown, event);
                return DriveOutcome::BrokenDown(event);
            }

            if self.draw(CHANCE) < GAS_STATION_THRESHOLD {
                self.emit(EventKind::StoppedAtGasStation, self.snapshot());
                self.refuel();
            }
        }
        DriveOutcome::Completed
    }

    fn draw(&self, range: Range<i32>) -> i32 {
        self.rand.borrow_mut().gen_range(range)
    }

    fn emit(&self, kind: EventKind, event: CarEvent) {
        let announcement = match kind {
            EventKind::OutOfFuel => format!("Car {} ran out of fuel at {} km!", self.brand, event.distance_traveled),
            EventKind::StoppedAtGasStation => {
                format!("Car {} stopped at a gas station at {} km.", self.brand, event.distance_traveled)
            }
            EventKind::BrokenDown => format!("Car {} broke down after {} km!", self.brand, event.distance_traveled),
        };
        if kind.is_terminal() {
            log_warn!(self, "{}", kind);
        }
        log_trace!(
            self,
            "{} {}",
            kind,
            serde_json::to_string(&event).unwrap_or_default()
        );
        self.transcript.say(announcement);

        // snapshot the list so handlers may subscribe, unsubscribe or drive again
        let handlers = self.handlers.borrow().get(&kind).cloned().unwrap_or_default();
        for handler in handlers {
            handler.handle_event(&event);
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.brand)
    }
}
