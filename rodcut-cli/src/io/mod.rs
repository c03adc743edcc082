use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
