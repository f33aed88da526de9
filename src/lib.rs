//! carlife contains two small independent exercises: a denomination calculator and an event-driven simulation of a
//! car observed by road services.
//!
//! ## Contents
//!
//! - [Denomination Calculator](crate#denomination-calculator)
//! - [Car Simulation](crate#car-simulation)
//! - [Example](crate#example)
//! - [Services](crate#services)
//! - [Re-entrant Driving](crate#re-entrant-driving)
//! - [Deterministic Runs](crate#deterministic-runs)
//!
//! ## Denomination Calculator
//!
//! [`Money`] is a number of units of the same denomination. Both the unit value and the count are checked to be
//! non-negative on construction and on every update. The total value is computed in `i64` and is always exact, while
//! [`Money::calculate_items`] computes the total in `i32`, the same way a cash register with 32-bit counters would,
//! and reports an overflow instead of wrapping around. A zero price is rejected as a division by zero.
//!
//! ## Car Simulation
//!
//! [`Car`] has a brand, a fuel level starting at 100 and an odometer starting at 0. Calling
//! [`drive`](Car::drive) processes up to the requested number of _ticks_. Each tick consumes a random amount of fuel
//! between 5 and 14, advances the odometer by one and makes two random draws deciding whether the car breaks down
//! (about 4% of ticks) or stops at a gas station (about 9% of the remaining ones). A tick that starts with an empty
//! tank raises the out-of-fuel event instead.
//!
//! The car raises its events on three broadcast channels identified by [`EventKind`]. Each event carries a
//! [`CarEvent`] snapshot of the fuel level and the odometer. Running out of fuel and breaking down end the current
//! `drive` call, while after a gas station stop the tank is filled and driving goes on.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use carlife::{CarEvent, Service, Simulation, SimConfig, Transcript, ScriptedSource};
//!
//! // A service counting the events it receives
//! struct Counter {
//!     seen: std::cell::Cell<u32>,
//! }
//!
//! impl Service for Counter {
//!     fn name(&self) -> &str {
//!         "counter"
//!     }
//!
//!     fn handle_event(&self, _event: &CarEvent) {
//!         self.seen.set(self.seen.get() + 1);
//!     }
//! }
//!
//! // Consume 10 fuel per tick, never break down, stop at a gas station on every tick
//! let config = SimConfig { distance: 3, ..SimConfig::default() };
//! let mut sim = Simulation::with_source(&config, ScriptedSource::new([10, 50, 1]), Transcript::recording());
//! let counter = Rc::new(Counter { seen: Default::default() });
//! sim.add_service(counter.clone());
//! sim.run();
//!
//! assert_eq!(counter.seen.get(), 3);
//! assert_eq!(sim.car().fuel_level(), 100);
//! assert_eq!(sim.car().distance_traveled(), 3);
//! ```
//!
//! ## Services
//!
//! Services implement the [`Service`] trait and are registered on all three channels at once via
//! [`service::subscribe`]. A service receives the same [`CarEvent`] regardless of the channel and chooses its
//! reaction from the event fields:
//!
//! - [`TowTruck`] tows a car with an empty tank to the nearest gas station, tows a car with less than half a tank
//! to the service center and otherwise helps it at every hundredth kilometer.
//! - [`GasStation`] refuels a car with an empty tank and sends it on for another ten kilometers.
//! - [`Mechanic`] inspects the car at every fiftieth kilometer.
//!
//! Services keep a weak reference to the car. They never keep it alive, and after the car is dropped they ignore
//! events.
//!
//! Reactions and car announcements are written to a [`Transcript`], which is the console output of the simulation.
//! Diagnostics go through the [`log`](https://crates.io/crates/log) facade, see the [`log`](crate::log) module.
//!
//! ## Re-entrant Driving
//!
//! Events are delivered synchronously in subscription order, before the car continues. A handler may call back into
//! the car, and [`GasStation`] does so by calling `drive` again from inside the handler. The nested call runs on the
//! same call stack with a fresh budget of ten ticks. When it was triggered by running out of fuel, the interrupted
//! call returns right after, so the rest of the original distance is abandoned. Nesting is not limited.
//!
//! ## Deterministic Runs
//!
//! Random draws come from a [`RandomSource`]. [`SeededSource`] is a PCG generator initialized with a user-defined
//! seed, and [`ScriptedSource`] replays a fixed list of draws, which makes it possible to hit the exact thresholds
//! of breakdowns and gas station stops in tests.

#![warn(missing_docs)]

pub mod car;
pub mod config;
pub mod event;
pub mod log;
pub mod menu;
pub mod money;
pub mod random;
pub mod service;
pub mod simulation;
pub mod transcript;

pub use colored;
pub use car::{Car, DriveOutcome};
pub use config::SimConfig;
pub use event::{CarEvent, EventKind};
pub use money::{Money, MoneyError};
pub use random::{RandomSource, ScriptedSource, SeededSource};
pub use service::{GasStation, Mechanic, Reaction, Service, TowTruck};
pub use simulation::Simulation;
pub use transcript::Transcript;
