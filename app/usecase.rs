use log::trace;

use crate::dao::{DaoError, HaveRecordDao, RecordFinder, RecordInserter};
use crate::domain::RecordId;
use crate::dto::RecordDto;
use tx_rs::Tx;

// faults from the dao are passed through as they are.
// wrapping them is the job of the service.
pub trait RecordUsecase<Ctx>: HaveRecordDao<Ctx> {
    fn insert_selective<'a>(
        &'a mut self,
        record: Option<RecordDto>,
    ) -> impl tx_rs::Tx<Ctx, Item = usize, Err = DaoError>
    where
        Ctx: 'a,
    {
        let dao = self.get_dao();
        tx_rs::with_tx(move |ctx: &mut Ctx| match record {
            Some(record) => dao.insert_selective(record).run(ctx),
            None => {
                trace!("no record to insert");
                Ok(0)
            }
        })
    }
    fn batch_insert_selective<'a>(
        &'a mut self,
        records: Option<Vec<RecordDto>>,
    ) -> impl tx_rs::Tx<Ctx, Item = usize, Err = DaoError>
    where
        Ctx: 'a,
    {
        let dao = self.get_dao();
        tx_rs::with_tx(move |ctx: &mut Ctx| {
            let Some(records) = records else {
                trace!("no records to insert");
                return Ok(0);
            };
            // stop at the first fault, the partial total is dropped
            records.into_iter().try_fold(0, |total, record| {
                dao.insert_selective(record)
                    .run(ctx)
                    .map(|count| total + count)
            })
        })
    }
    fn get_by_key<'a>(
        &'a mut self,
        key: Option<RecordId>,
    ) -> impl tx_rs::Tx<Ctx, Item = Option<RecordDto>, Err = DaoError>
    where
        Ctx: 'a,
    {
        let dao = self.get_dao();
        dao.select_by_primary_key(key)
    }
}
