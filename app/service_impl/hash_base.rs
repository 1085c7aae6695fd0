use log::{error, trace};
use std::{cell::RefCell, cell::RefMut};

use crate::dao::{self, DaoError, HaveRecordDao};
use crate::hs_db::{HashDB, Table};
use crate::service::{RecordService, ServiceError};
use crate::usecase::RecordUsecase;

#[derive(Debug, Clone)]
pub struct RecordUsecaseImpl {
    dao: HashDB,
}
impl RecordUsecaseImpl {
    pub fn new(dao: HashDB) -> Self {
        Self { dao }
    }
}
impl<'a> RecordUsecase<RefMut<'a, Table>> for RecordUsecaseImpl {}
impl<'a> HaveRecordDao<RefMut<'a, Table>> for RecordUsecaseImpl {
    fn get_dao(&self) -> &impl dao::RecordDao<RefMut<'a, Table>> {
        &self.dao
    }
}

pub struct RecordServiceImpl {
    hs_db: HashDB,
    usecase: RefCell<RecordUsecaseImpl>,
}
impl RecordServiceImpl {
    pub fn new() -> Self {
        let dao = HashDB::new();
        let usecase = RefCell::new(RecordUsecaseImpl::new(dao.clone()));

        Self {
            hs_db: dao,
            usecase,
        }
    }
}
impl Default for RecordServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}
impl<'a> RecordService<'a, RefMut<'a, Table>> for RecordServiceImpl {
    type U = RecordUsecaseImpl;

    // service is responsible for transaction management
    fn run_tx<T, F>(&'a mut self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut RecordUsecaseImpl, &mut RefMut<'a, Table>) -> Result<T, DaoError>,
    {
        let mut ctx = self.hs_db.records.borrow_mut();
        trace!("transaction started");
        let snapshot = ctx.clone();

        let mut usecase = self.usecase.borrow_mut();
        let res = f(&mut usecase, &mut ctx);

        match res {
            Ok(v) => {
                trace!("transaction committed");
                Ok(v)
            }
            Err(e) => {
                *ctx = snapshot;
                error!("transaction rollbacked: {}", e);
                Err(ServiceError::TransactionFailed(e))
            }
        }
    }
}
