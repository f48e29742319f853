//! Find cloned proof goals modulo alpha-equivalence.

use clap::Parser;
use klonfind::{par, seq, Error, Opt, PathRead, Stage};
use std::time::Instant;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn run(opt: &Opt) -> Result<(), Error> {
    // if a precise number of parallel jobs has been given
    if let Some(Some(jobs)) = opt.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()?;
    }

    let start = Instant::now();
    let mut goals = Vec::new();
    for file in opt.files.iter() {
        let file = PathRead::try_from(file)?;
        goals.extend(klonfind::goals(&file)?);
    }
    log::info!("Parsed {} goals in {:.4} seconds", goals.len(), start.elapsed().as_secs_f64());
    if opt.omits(Stage::Generalize) {
        return Ok(());
    }

    let start = Instant::now();
    let clones = if opt.jobs.is_some() {
        par::run(goals, opt)?
    } else {
        seq::run(goals, opt)?
    };
    log::info!("Found clones in {:.4} seconds", start.elapsed().as_secs_f64());

    if let Some(clones) = clones {
        log::info!("Found {} clone pairs", clones.pairs.len());
        match &opt.output {
            Some(path) => std::fs::write(path, clones.to_string())?,
            None => print!("{}", clones),
        }
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();
    run(&opt).map_err(|e| {
        log::error!("{}", e);
        e
    })
}
