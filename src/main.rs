use battlegrid::cli;
use battlegrid::io::{OutputWriter, TerminalIO};
use battlegrid::models::constants::{Deployment, ALPHA, BRAVO, CHARLIE};
use battlegrid::ui::presenters::{CombatPresenter, FleetPresenter};
use battlegrid::{Army, Battleship, Combatant, Coordinate, Deployable, FleetResult};
use tracing_subscriber::EnvFilter;

fn deploy<T: Deployable>(deployment: &Deployment) -> FleetResult<T> {
    T::deploy(deployment.origin, deployment.orientation, deployment.length)
}

fn fire(
    attacker: (&str, &dyn Combatant),
    target: (&str, &dyn Combatant),
    at: Coordinate,
    output: &mut dyn OutputWriter,
) {
    let result = attacker.1.launch_torpedo(target.1.as_target(), at);
    CombatPresenter::show_torpedo(attacker.0, target.0, at, result, output);
}

fn run(output: &mut dyn OutputWriter) -> FleetResult<()> {
    let alpha: Battleship = deploy(&ALPHA)?;
    let bravo: Battleship = deploy(&BRAVO)?;
    let charlie: Army = deploy(&CHARLIE)?;

    let fleet: [(&str, &dyn Combatant); 3] = [
        (ALPHA.name, &alpha),
        (BRAVO.name, &bravo),
        (CHARLIE.name, &charlie),
    ];
    for (name, entity) in fleet {
        FleetPresenter::show_occupancy(name, entity.as_target(), output);
    }
    output.writeln("");

    fire(fleet[0], fleet[1], Coordinate::new(0, 2), output);
    fire(fleet[1], fleet[0], Coordinate::new(2, 2), output);
    fire(fleet[2], fleet[1], Coordinate::new(7, 4), output);
    Ok(())
}

fn main() {
    let args = cli::args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("*** BATTLEGRID ***");
    println!();

    let mut output = TerminalIO;
    if let Err(e) = run(&mut output) {
        CombatPresenter::show_error("FLEET", &e, &mut output);
        std::process::exit(1);
    }
}
