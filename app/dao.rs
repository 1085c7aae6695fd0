use thiserror::Error;

use crate::domain::RecordId;
use crate::dto::RecordDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DaoError {
    #[error("insert error: {0}")]
    InsertError(String),
    #[error("select error: {0}")]
    SelectError(String),
}

/// Writes the present columns of one record.
///
/// Returns the number of rows written: 1 when stored, 0 when the accessor
/// declined to write anything.
pub trait RecordInserter<Ctx> {
    fn insert_selective(
        &self,
        record: RecordDto,
    ) -> impl tx_rs::Tx<Ctx, Item = usize, Err = DaoError>;
}

pub trait RecordFinder<Ctx> {
    fn select_by_primary_key(
        &self,
        key: Option<RecordId>,
    ) -> impl tx_rs::Tx<Ctx, Item = Option<RecordDto>, Err = DaoError>;
}

pub trait RecordDao<Ctx>: RecordInserter<Ctx> + RecordFinder<Ctx> {}
impl<Ctx, T> RecordDao<Ctx> for T where T: RecordInserter<Ctx> + RecordFinder<Ctx> {}

pub trait HaveRecordDao<Ctx> {
    fn get_dao(&self) -> &impl RecordDao<Ctx>;
}
