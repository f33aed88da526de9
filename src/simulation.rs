//! Simulation setup and execution.

use std::rc::Rc;

use crate::car::{Car, DriveOutcome};
use crate::config::SimConfig;
use crate::log_info;
use crate::random::{RandomSource, SeededSource};
use crate::service::{self, GasStation, Mechanic, Service, TowTruck};
use crate::transcript::Transcript;

/// Car simulation: one car and the services observing it.
pub struct Simulation {
    car: Rc<Car>,
    services: Vec<Rc<dyn Service>>,
    distance: u32,
}

impl Simulation {
    /// Creates a simulation with a seeded random source and a recording transcript.
    pub fn new(config: &SimConfig) -> Self {
        Self::with_source(config, SeededSource::new(config.seed), Transcript::recording())
    }

    /// Creates a simulation with the given random source and transcript.
    pub fn with_source(config: &SimConfig, rand: impl RandomSource + 'static, transcript: Transcript) -> Self {
        let car = Rc::new(Car::new(&config.brand, rand, transcript));
        log_info!(car, "created, seed {}", config.seed);
        Self {
            car,
            services: Vec::new(),
            distance: config.distance,
        }
    }

    /// Returns the simulated car.
    pub fn car(&self) -> &Rc<Car> {
        &self.car
    }

    /// Returns the transcript of the simulation.
    pub fn transcript(&self) -> &Transcript {
        self.car.transcript()
    }

    /// Subscribes the service to the car and keeps it alive for the lifetime of the simulation.
    pub fn add_service(&mut self, service: Rc<dyn Service>) -> Rc<dyn Service> {
        service::subscribe(&self.car, &service);
        self.services.push(service.clone());
        service
    }

    /// Unsubscribes the service from the car.
    pub fn remove_service(&mut self, service: &Rc<dyn Service>) {
        service::unsubscribe(&self.car, service);
        self.services.retain(|s| !service::same_service(s, service));
    }

    /// Attaches a tow truck, a gas station and a mechanic, in this order.
    pub fn add_default_services(&mut self) {
        let tow_truck = Rc::new(TowTruck::new(&self.car));
        let gas_station = Rc::new(GasStation::new(&self.car));
        let mechanic = Rc::new(Mechanic::new(&self.car));
        self.add_service(tow_truck);
        self.add_service(gas_station);
        self.add_service(mechanic);
    }

    /// Drives the car for the configured distance.
    pub fn run(&self) -> DriveOutcome {
        let outcome = self.car.drive(self.distance);
        log_info!(
            self.car,
            "finished with {:?}, fuel {}",
            outcome,
            self.car.fuel_level()
        );
        outcome
    }
}
