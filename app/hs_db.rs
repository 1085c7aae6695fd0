use log::trace;
use std::{
    cell::{RefCell, RefMut},
    collections::HashMap,
};

use crate::dao::{DaoError, RecordFinder, RecordInserter};
use crate::domain::RecordId;
use crate::dto::RecordDto;

pub type Table = HashMap<RecordId, RecordDto>;

#[derive(Debug, Clone, Default)]
pub struct HashDB {
    pub(crate) records: RefCell<Table>,
}
impl HashDB {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(ctx: &Table) -> Result<RecordId, DaoError> {
    match ctx.keys().max() {
        None => Ok(1),
        Some(id) => id
            .checked_add(1)
            .ok_or_else(|| DaoError::InsertError("id space exhausted".to_string())),
    }
}

impl<'a> RecordInserter<RefMut<'a, Table>> for HashDB {
    fn insert_selective(
        &self,
        record: RecordDto,
    ) -> impl tx_rs::Tx<RefMut<'a, Table>, Item = usize, Err = DaoError> {
        trace!("inserting record: {:?}", record);
        tx_rs::with_tx(move |ctx: &mut RefMut<'a, Table>| {
            if record.is_blank() {
                trace!("no column selected, skip insert");
                return Ok(0);
            }
            let id = match record.id {
                Some(id) if ctx.contains_key(&id) => {
                    return Err(DaoError::InsertError(format!("duplicate key: {}", id)));
                }
                Some(id) => id,
                None => next_id(ctx)?,
            };
            ctx.insert(
                id,
                RecordDto {
                    id: Some(id),
                    ..record
                },
            );
            Ok(1)
        })
    }
}

impl<'a> RecordFinder<RefMut<'a, Table>> for HashDB {
    fn select_by_primary_key(
        &self,
        key: Option<RecordId>,
    ) -> impl tx_rs::Tx<RefMut<'a, Table>, Item = Option<RecordDto>, Err = DaoError> {
        trace!("selecting record: {:?}", key);
        tx_rs::with_tx(move |ctx: &mut RefMut<'a, Table>| {
            Ok(key.and_then(|id| ctx.get(&id).cloned()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date;
    use tx_rs::Tx;

    #[test]
    fn test_insert_generates_id() {
        let db = HashDB::new();
        let mut ctx = db.records.borrow_mut();

        let first = db
            .insert_selective(RecordDto::new("Alice", date(2012, 11, 2), None))
            .run(&mut ctx);
        let second = db
            .insert_selective(RecordDto::new("Bob", date(1995, 11, 6), Some("receiver")))
            .run(&mut ctx);

        assert_eq!(first, Ok(1));
        assert_eq!(second, Ok(1));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx[&1].name.as_deref(), Some("Alice"));
        assert_eq!(ctx[&2].id, Some(2));
    }

    #[test]
    fn test_insert_blank_is_noop() {
        let db = HashDB::new();
        let mut ctx = db.records.borrow_mut();

        let result = db.insert_selective(RecordDto::default()).run(&mut ctx);

        assert_eq!(result, Ok(0));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_insert_duplicate_key() {
        let db = HashDB::new();
        let mut ctx = db.records.borrow_mut();
        let record = RecordDto {
            id: Some(10),
            ..RecordDto::new("Eve", date(1996, 12, 15), None)
        };

        assert_eq!(db.insert_selective(record.clone()).run(&mut ctx), Ok(1));
        assert_eq!(
            db.insert_selective(record).run(&mut ctx),
            Err(DaoError::InsertError("duplicate key: 10".to_string()))
        );
        // generated ids continue after the explicit one
        assert_eq!(
            db.insert_selective(RecordDto::new("Bob", date(1995, 11, 6), None))
                .run(&mut ctx),
            Ok(1)
        );
        assert!(ctx.contains_key(&11));
    }

    #[test]
    fn test_insert_after_max_id() {
        let db = HashDB::new();
        let mut ctx = db.records.borrow_mut();
        let last = RecordDto {
            id: Some(RecordId::MAX),
            ..RecordDto::new("Alice", date(2012, 11, 2), None)
        };

        assert_eq!(db.insert_selective(last).run(&mut ctx), Ok(1));
        assert_eq!(
            db.insert_selective(RecordDto::new("Bob", date(1995, 11, 6), None))
                .run(&mut ctx),
            Err(DaoError::InsertError("id space exhausted".to_string()))
        );
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_select_by_primary_key() {
        let db = HashDB::new();
        let mut ctx = db.records.borrow_mut();
        let _ = db
            .insert_selective(RecordDto::new("Alice", date(2012, 11, 2), None))
            .run(&mut ctx);

        let found = db.select_by_primary_key(Some(1)).run(&mut ctx);
        assert_eq!(
            found,
            Ok(Some(RecordDto {
                id: Some(1),
                ..RecordDto::new("Alice", date(2012, 11, 2), None)
            }))
        );
        assert_eq!(db.select_by_primary_key(Some(2)).run(&mut ctx), Ok(None));
        assert_eq!(db.select_by_primary_key(None).run(&mut ctx), Ok(None));
    }
}
