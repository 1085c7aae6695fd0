use log::{error, trace};
use std::{env, fs, io};
use thiserror::Error;

mod dao;
mod domain;
mod dto;
mod hs_db;
mod service;
mod service_impl;
mod usecase;

pub use domain::{Record, RecordId};
pub use dto::RecordDto;
pub use service::{RecordService, ServiceError};
pub use service_impl::RecordServiceImpl;

use crate::domain::date;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read records file: {0}")]
    Io(#[from] io::Error),
    #[error("cannot parse records file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("invalid LOOKUP_KEY: {0:?}")]
    InvalidLookupKey(String),
}

fn load_records(path: &str) -> Result<Vec<Record>, LoadError> {
    trace!("loading records from: {}", path);
    let json = fs::read_to_string(path)?;
    let dtos: Vec<RecordDto> = serde_json::from_str(&json)?;

    Ok(dtos.into_iter().map(Record::from).collect())
}

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Abel", date(1802, 8, 5), Some("Abel's theorem")),
        Record::new("Euler", date(1707, 4, 15), Some("Euler's identity")),
        Record::new("Galois", date(1811, 10, 25), Some("Group Theory")),
        Record::default(),
        Record::new("Gauss", date(1777, 4, 30), Some("King of Math")).with_id(100),
    ]
}

fn parse_lookup_key(value: Option<String>) -> Result<Option<RecordId>, AppError> {
    value
        .map(|key| {
            key.trim()
                .parse::<RecordId>()
                .map_err(|_| AppError::InvalidLookupKey(key))
        })
        .transpose()
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let records = match env::var("RECORDS_JSON") {
        Ok(path) => load_records(&path)?,
        Err(_) => sample_records(),
    };
    let lookup_key = parse_lookup_key(env::var("LOOKUP_KEY").ok())?;

    let mut service = RecordServiceImpl::new();

    let count = service.register(Some(Record::new(
        "cutsea",
        date(1970, 11, 6),
        Some("rustacean"),
    )))?;
    println!("registered: {}", count);

    let count = service.register(None)?;
    println!("registered nothing: {}", count);

    let total = records.len();
    match service.batch_register(Some(records)) {
        Ok(count) => println!("batch registered: {} of {}", count, total),
        Err(e) => error!("batch register aborted: {}", e),
    }

    let key = lookup_key.or(Some(100));
    match service.find(key)? {
        Some(record) => println!("found: {}", record),
        None => println!("not found: {:?}", key),
    }

    println!("done everything!");
    Ok(())
}
