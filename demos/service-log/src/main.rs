use std::cell::RefCell;
use std::rc::Rc;

use carlife::{CarEvent, Service, SimConfig, Simulation, Transcript};

// Service keeping the events it receives
struct Logbook {
    entries: RefCell<Vec<CarEvent>>,
}

impl Service for Logbook {
    fn name(&self) -> &str {
        "logbook"
    }

    // Invoked for every event of the car, whatever the channel
    fn handle_event(&self, event: &CarEvent) {
        self.entries.borrow_mut().push(*event);
    }
}

fn main() {
    env_logger::init();

    // Simulation with random seed 123 printing the transcript as it goes
    let config = SimConfig {
        distance: 500,
        ..SimConfig::default()
    };
    let mut sim = Simulation::with_source(&config, carlife::SeededSource::new(config.seed), Transcript::echo());

    // Standard services first, then the logbook, so it sees every event after them
    sim.add_default_services();
    let logbook = Rc::new(Logbook {
        entries: RefCell::new(Vec::new()),
    });
    sim.add_service(logbook.clone());

    let outcome = sim.run();
    log::info!("outcome: {:?}", outcome);

    println!("\nLogbook:");
    for event in logbook.entries.borrow().iter() {
        println!("{:>5} km, fuel {:>4}", event.distance_traveled, event.fuel_level);
    }
    println!(
        "Traveled {} km, {} lines printed",
        sim.car().distance_traveled(),
        sim.transcript().len()
    );
}
