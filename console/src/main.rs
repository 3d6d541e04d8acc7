use std::io::{self, Write};
use std::thread;

use anyhow::{anyhow, Context};
use life::{patterns, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod config;

use config::{Config, Seeding, USAGE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(config) = Config::from_args(std::env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };
    log::info!(
        "{}x{} board, seeding {:?}, {} extra cells",
        config.width,
        config.height,
        config.seeding,
        config.cells.len()
    );

    let mut simulation = build_simulation(&config)?;
    let stdout = io::stdout();

    print_generation(&mut stdout.lock(), &simulation)?;
    loop {
        if config.generations.is_some_and(|limit| simulation.generation() >= limit) {
            break;
        }
        thread::sleep(config.step_interval);

        let changed = simulation.tick();
        print_generation(&mut stdout.lock(), &simulation)?;
        if !changed {
            log::info!("stable after {} generations", simulation.generation());
            break;
        }
    }

    Ok(())
}

fn build_simulation(config: &Config) -> anyhow::Result<Simulation> {
    let mut simulation = Simulation::new(config.width, config.height)?;
    let grid = simulation.grid_mut();

    match &config.seeding {
        Seeding::Pattern(name) => {
            let pattern = patterns::find(name).ok_or_else(|| {
                let known: Vec<_> = patterns::PATTERNS
                    .iter()
                    .map(|pattern| pattern.name)
                    .collect();
                anyhow!("unknown pattern {:?}, expected one of {}", name, known.join(", "))
            })?;
            pattern.place_centered(grid).context("seed pattern")?;
        }
        Seeding::Random { density, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };
            grid.randomize(&mut rng, *density);
        }
    }

    simulation
        .seed_all(config.cells.iter().copied())
        .context("seed --cell coordinates")?;
    Ok(simulation)
}

fn print_generation(out: &mut impl Write, simulation: &Simulation) -> io::Result<()> {
    let grid = simulation.current_grid();
    writeln!(
        out,
        "generation {} (population {})",
        simulation.generation(),
        grid.population()
    )?;
    write!(out, "{}", grid)?;
    out.flush()
}
