use log::{error, trace};
use thiserror::Error;

use crate::dao::DaoError;
use crate::domain::{Record, RecordId};
use crate::dto::RecordDto;
use crate::usecase::RecordUsecase;
use tx_rs::Tx;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("transaction failed: {0}")]
    TransactionFailed(DaoError),
}

pub trait RecordService<'a, Ctx> {
    type U: RecordUsecase<Ctx>;

    fn run_tx<T, F>(&'a mut self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Self::U, &mut Ctx) -> Result<T, DaoError>;

    fn register(&'a mut self, record: Option<Record>) -> Result<usize, ServiceError> {
        trace!("register record: {:?}", record);

        self.run_tx(move |usecase, ctx| {
            usecase
                .insert_selective(record.map(RecordDto::from))
                .run(ctx)
        })
        .map_err(|e| {
            error!("cannot register record: {}", e);
            e
        })
    }

    fn batch_register(&'a mut self, records: Option<Vec<Record>>) -> Result<usize, ServiceError> {
        trace!(
            "batch register records: {:?}",
            records.as_ref().map(|rs| rs.len())
        );

        self.run_tx(move |usecase, ctx| {
            usecase
                .batch_insert_selective(
                    records.map(|rs| rs.into_iter().map(RecordDto::from).collect()),
                )
                .run(ctx)
        })
        .map_err(|e| {
            error!("cannot batch register records: {}", e);
            e
        })
    }

    fn find(&'a mut self, key: Option<RecordId>) -> Result<Option<Record>, ServiceError> {
        trace!("find record: key={:?}", key);

        self.run_tx(move |usecase, ctx| usecase.get_by_key(key).run(ctx))
            .map(|found| found.map(Record::from))
            .map_err(|e| {
                error!("cannot find record: key={:?}: {}", key, e);
                e
            })
    }
}
