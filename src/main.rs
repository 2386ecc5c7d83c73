extern crate float_avl;
#[macro_use]
extern crate log;
extern crate rand;
extern crate simplelog;

use float_avl::avl_tree::AvlSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::env;
use std::error::Error;
use std::fs::File;
use std::process;
use std::time::Instant;

const DEFAULT_LIST_SIZE: usize = 10;
const MAX_RAND_VALUE: u32 = 100;

struct Options {
    list_size: usize,
    seed: Option<u64>,
    log_path: Option<String>,
}

impl Options {
    // usage: float-avl [list_size] [seed] [log_path]
    fn from_args<I>(mut args: I) -> Result<Options, Box<dyn Error>>
    where
        I: Iterator<Item = String>,
    {
        let list_size = match args.next() {
            Some(arg) => arg.parse()?,
            None => DEFAULT_LIST_SIZE,
        };
        let seed = match args.next() {
            Some(arg) => Some(arg.parse()?),
            None => None,
        };
        Ok(Options {
            list_size,
            seed,
            log_path: args.next(),
        })
    }
}

fn init_logging(log_path: &Option<String>) -> Result<(), Box<dyn Error>> {
    let level = match env::var("AVL_LOG") {
        Ok(level) => level.parse()?,
        Err(_) => LevelFilter::Info,
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(path) = log_path {
        loggers.push(WriteLogger::new(level, Config::default(), File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn random_list(list_size: usize, seed: Option<u64>) -> Vec<f32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..list_size)
        .map(|_| rng.gen_range(0..MAX_RAND_VALUE) as f32)
        .collect()
}

fn format_values(values: &[f32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = Options::from_args(env::args().skip(1))?;
    init_logging(&options.log_path)?;

    let values = random_list(options.list_size, options.seed);
    info!("input: {}", format_values(&values));

    let start = Instant::now();
    let set = AvlSet::from_values(&values)?;
    info!(
        "built {} distinct values from {} inputs in {:?}",
        set.len(),
        values.len(),
        start.elapsed(),
    );

    println!("Pre-order traversal: {}", format_values(&set.traverse()));
    println!("Height: {}", set.height());
    println!("Minimum: {}", set.minimum()?.value());
    println!("Maximum: {}", set.maximum()?.value());
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
