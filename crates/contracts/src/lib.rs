//! Types shared between the marketplace front-end and its REST backend:
//! the response envelope, pagination, entity aggregates, status enums and
//! the session blobs kept in browser storage.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
