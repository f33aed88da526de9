use std::cell::RefCell;
use std::rc::Rc;

use carlife::car::FULL_TANK;
use carlife::service::{self, Service};
use carlife::{
    Car, CarEvent, DriveOutcome, EventKind, GasStation, Mechanic, ScriptedSource, SimConfig, Simulation, TowTruck,
    Transcript,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Draws of ticks without events: consumption, breakdown check, gas station check.
fn ticks(consumption: i32, n: usize) -> Vec<i32> {
    [consumption, 50, 50].repeat(n)
}

fn scripted_car(draws: Vec<i32>) -> Rc<Car> {
    Rc::new(Car::new("Test", ScriptedSource::new(draws), Transcript::recording()))
}

struct Recorder {
    label: &'static str,
    log: Rc<RefCell<Vec<(&'static str, CarEvent)>>>,
}

impl Service for Recorder {
    fn name(&self) -> &str {
        self.label
    }

    fn handle_event(&self, event: &CarEvent) {
        self.log.borrow_mut().push((self.label, *event));
    }
}

fn recorder(label: &'static str, log: &Rc<RefCell<Vec<(&'static str, CarEvent)>>>) -> Rc<dyn Service> {
    Rc::new(Recorder {
        label,
        log: log.clone(),
    })
}

#[test]
fn zero_distance_raises_nothing() {
    init_logger();
    let car = scripted_car(vec![1, 1, 1]);
    let log = Rc::default();
    service::subscribe(&car, &recorder("r", &log));

    assert_eq!(car.drive(0), DriveOutcome::Completed);
    assert_eq!((car.fuel_level(), car.distance_traveled()), (100, 0));
    assert!(log.borrow().is_empty());
}

#[test]
fn quiet_tick_consumes_minimum() {
    init_logger();
    let car = scripted_car(vec![5, 5, 10]);
    let log = Rc::default();
    service::subscribe(&car, &recorder("r", &log));

    assert_eq!(car.drive(1), DriveOutcome::Completed);
    assert_eq!(car.fuel_level(), 95);
    assert_eq!(car.distance_traveled(), 1);
    assert!(log.borrow().is_empty());
    assert!(car.transcript().is_empty());
}

#[test]
fn breakdown_threshold() {
    init_logger();
    let car = scripted_car(vec![5, 4]);
    let log = Rc::default();
    service::subscribe(&car, &recorder("r", &log));

    let outcome = car.drive(5);
    assert_eq!(outcome, DriveOutcome::BrokenDown(CarEvent::new(95, 1)));
    assert_eq!(car.distance_traveled(), 1);
    assert_eq!(*log.borrow(), [("r", CarEvent::new(95, 1))]);
    assert_eq!(car.transcript().lines(), ["Car Test broke down after 1 km!"]);

    let car = scripted_car(vec![5, 5, 50]);
    assert_eq!(car.drive(3), DriveOutcome::Completed);
    assert_eq!(car.distance_traveled(), 3);
}

#[test]
fn gas_station_threshold() {
    init_logger();
    let car = scripted_car(vec![10, 50, 9]);
    let log = Rc::default();
    service::subscribe(&car, &recorder("r", &log));

    assert_eq!(car.drive(2), DriveOutcome::Completed);
    assert_eq!(car.fuel_level(), FULL_TANK);
    assert_eq!(car.distance_traveled(), 2);
    assert_eq!(
        *log.borrow(),
        [("r", CarEvent::new(90, 1)), ("r", CarEvent::new(90, 2))]
    );
    assert_eq!(
        car.transcript().lines(),
        [
            "Car Test stopped at a gas station at 1 km.",
            "Car Test stopped at a gas station at 2 km."
        ]
    );

    let car = scripted_car(vec![10, 50, 10]);
    assert_eq!(car.drive(2), DriveOutcome::Completed);
    assert_eq!(car.fuel_level(), 80);
    assert!(car.transcript().is_empty());
}

#[test]
fn out_of_fuel_checked_at_tick_start() {
    init_logger();
    let car = scripted_car(ticks(14, 1));

    // 8 ticks of 14 leave -12, the empty tank is only noticed on the next tick
    assert_eq!(car.drive(8), DriveOutcome::Completed);
    assert_eq!(car.fuel_level(), -12);
    assert!(car.transcript().is_empty());

    assert_eq!(car.drive(5), DriveOutcome::OutOfFuel(CarEvent::new(-12, 8)));
    assert_eq!(car.distance_traveled(), 8);
    assert_eq!(car.transcript().lines(), ["Car Test ran out of fuel at 8 km!"]);
}

#[test]
fn out_of_fuel_ends_drive() {
    init_logger();
    let car = scripted_car(ticks(14, 1));
    let log = Rc::default();
    service::subscribe(&car, &recorder("r", &log));

    assert_eq!(car.drive(200), DriveOutcome::OutOfFuel(CarEvent::new(-12, 8)));
    assert_eq!(car.distance_traveled(), 8);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn handlers_run_in_subscription_order() {
    init_logger();
    let car = scripted_car(vec![5, 1]);
    let log = Rc::default();
    let first = recorder("first", &log);
    let second = recorder("second", &log);
    service::subscribe(&car, &first);
    service::subscribe(&car, &second);

    car.drive(1);
    let labels: Vec<_> = log.borrow().iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["first", "second"]);
}

#[test]
fn unsubscribe_removes_from_all_channels() {
    init_logger();
    let car = scripted_car(vec![5, 1]);
    let log = Rc::default();
    let kept = recorder("kept", &log);
    let removed = recorder("removed", &log);
    service::subscribe(&car, &kept);
    service::subscribe(&car, &removed);
    service::unsubscribe(&car, &removed);

    for kind in EventKind::ALL {
        assert_eq!(car.handler_count(kind), 1);
    }
    assert!(!car.remove_handler(EventKind::BrokenDown, &removed));

    car.drive(1);
    assert_eq!(*log.borrow(), [("kept", CarEvent::new(95, 1))]);
}

#[test]
fn gas_station_redrives_after_running_dry() {
    init_logger();
    let mut draws = ticks(14, 8);
    draws.extend(ticks(5, 10));
    let car = scripted_car(draws);
    for service in [
        Rc::new(TowTruck::new(&car)) as Rc<dyn Service>,
        Rc::new(GasStation::new(&car)),
        Rc::new(Mechanic::new(&car)),
    ] {
        service::subscribe(&car, &service);
    }

    // the nested drive covers 10 km, the rest of the original 200 is dropped
    assert_eq!(car.drive(200), DriveOutcome::OutOfFuel(CarEvent::new(-12, 8)));
    assert_eq!(car.distance_traveled(), 18);
    assert_eq!(car.fuel_level(), 50);
    assert_eq!(
        car.transcript().lines(),
        [
            "Car Test ran out of fuel at 8 km!",
            "Tow truck will take car Test to the nearest gas station.",
            "Gas station will refuel car Test.",
        ]
    );
}

#[test]
fn gas_station_stop_with_empty_tank_continues_outer_drive() {
    init_logger();
    let mut draws = ticks(14, 7);
    draws.extend([14, 50, 1]);
    draws.extend(ticks(5, 11));
    let car = scripted_car(draws);
    let gas_station: Rc<dyn Service> = Rc::new(GasStation::new(&car));
    service::subscribe(&car, &gas_station);

    assert_eq!(car.drive(9), DriveOutcome::Completed);
    // 8 km, then 10 km of the nested drive, then the last tick of the outer one on a full tank
    assert_eq!(car.distance_traveled(), 19);
    assert_eq!(car.fuel_level(), 95);
    assert_eq!(
        car.transcript().lines(),
        [
            "Car Test stopped at a gas station at 8 km.",
            "Gas station will refuel car Test.",
        ]
    );
}

#[test]
fn services_ignore_dropped_car() {
    init_logger();
    let transcript = Transcript::recording();
    let car = Rc::new(Car::new("Gone", ScriptedSource::default(), transcript.clone()));
    let tow_truck = TowTruck::new(&car);
    let gas_station = GasStation::new(&car);
    drop(car);

    tow_truck.handle_event(&CarEvent::new(0, 100));
    gas_station.handle_event(&CarEvent::new(0, 100));
    assert!(transcript.is_empty());
}

#[test]
fn same_seed_same_run() {
    init_logger();
    let run = || {
        let mut sim = Simulation::new(&SimConfig {
            seed: 42,
            ..SimConfig::default()
        });
        sim.add_default_services();
        let outcome = sim.run();
        (outcome, sim.car().distance_traveled(), sim.transcript().lines())
    };
    assert_eq!(run(), run());
}

#[test]
fn removed_service_stops_reacting() {
    init_logger();
    let config = SimConfig {
        distance: 1,
        ..SimConfig::default()
    };
    let mut sim = Simulation::with_source(&config, ScriptedSource::new([5, 1]), Transcript::recording());
    let mechanic = Rc::new(Mechanic::new(sim.car()));
    let tow_truck = Rc::new(TowTruck::new(sim.car()));
    let mechanic = sim.add_service(mechanic);
    let tow_truck = sim.add_service(tow_truck);
    sim.remove_service(&mechanic);
    assert_eq!(sim.car().handler_count(EventKind::BrokenDown), 1);
    drop(tow_truck);

    // fuel 95 at 1 km: the tow truck has nothing to do either
    assert_eq!(sim.run(), DriveOutcome::BrokenDown(CarEvent::new(95, 1)));
    assert_eq!(sim.transcript().lines(), ["Car BMW broke down after 1 km!"]);
}
