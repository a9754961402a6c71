//! Mapping from domain write shapes onto SeaORM active models.

/// Converts the writable fields of a record into an active model.
///
/// `into_insert` leaves the primary key unset so the database assigns it and
/// sets write-once columns. `into_update` targets an existing row by key and
/// must leave write-once columns unset.
pub trait WriteModel<A, ID> {
    fn into_insert(self) -> A;

    fn into_update(self, id: ID) -> A;
}
