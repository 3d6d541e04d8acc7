use std::time::Duration;

use anyhow::{bail, Context};

const GRID_WIDTH: usize = 40;
const GRID_HEIGHT: usize = 20;
const GENERATIONS: u64 = 50;
const DENSITY: f64 = 0.3;
const STEP_INTERVAL: Duration = Duration::from_millis(100);
const PATTERN: &str = "glider";

pub const USAGE: &str = "\
usage: life-console [options]
  --width N         board width (default 40)
  --height N        board height (default 20)
  --generations N   ticks to run (default 50); 0 runs until the board stops
                    changing, which an oscillator such as blinker never does
  --pattern NAME    blinker, toad, beacon, glider, r-pentomino or random (default glider)
  --density F       live share for a random board (default 0.3)
  --seed N          RNG seed for a reproducible random board
  --delay-ms N      pause between generations (default 100)
  --cell X,Y        extra live cell, may repeat";

#[derive(Debug, Clone, PartialEq)]
pub enum Seeding {
    Pattern(String),
    Random { density: f64, seed: Option<u64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// `None` runs until a tick leaves the board unchanged.
    pub generations: Option<u64>,
    pub seeding: Seeding,
    pub cells: Vec<(isize, isize)>,
    pub step_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            generations: Some(GENERATIONS),
            seeding: Seeding::Pattern(PATTERN.to_string()),
            cells: Vec::new(),
            step_interval: STEP_INTERVAL,
        }
    }
}

impl Config {
    /// Parses flags (without the program name) over the defaults.
    /// Returns `None` when help was requested.
    pub fn from_args<I>(args: I) -> anyhow::Result<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut pattern = PATTERN.to_string();
        let mut density = DENSITY;
        let mut seed = None;

        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            if flag == "--help" || flag == "-h" {
                return Ok(None);
            }
            let value = args
                .next()
                .with_context(|| format!("missing value for {}", flag))?;
            match flag.as_str() {
                "--width" => config.width = parse(&flag, &value)?,
                "--height" => config.height = parse(&flag, &value)?,
                "--generations" => {
                    let generations: u64 = parse(&flag, &value)?;
                    config.generations = (generations > 0).then_some(generations);
                }
                "--pattern" => pattern = value,
                "--density" => density = parse(&flag, &value)?,
                "--seed" => seed = Some(parse(&flag, &value)?),
                "--delay-ms" => config.step_interval = Duration::from_millis(parse(&flag, &value)?),
                "--cell" => config.cells.push(parse_cell(&value)?),
                _ => bail!("unknown option {}\n{}", flag, USAGE),
            }
        }

        if config.width == 0 || config.height == 0 {
            bail!("board must be at least 1x1, got {}x{}", config.width, config.height);
        }
        if !(0.0..=1.0).contains(&density) {
            bail!("--density must be between 0 and 1, got {}", density);
        }

        config.seeding = if pattern.eq_ignore_ascii_case("random") {
            Seeding::Random { density, seed }
        } else {
            Seeding::Pattern(pattern)
        };
        Ok(Some(config))
    }
}

fn parse<T>(flag: &str, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value for {}: {:?}", flag, value))
}

fn parse_cell(value: &str) -> anyhow::Result<(isize, isize)> {
    let (x, y) = value
        .split_once(',')
        .with_context(|| format!("--cell expects X,Y, got {:?}", value))?;
    Ok((parse("--cell", x.trim())?, parse("--cell", y.trim())?))
}
