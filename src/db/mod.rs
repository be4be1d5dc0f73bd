use serde::{Deserialize, Serialize};

mod file;
mod processed_store;

#[derive(Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq, Debug))]
pub enum Database {
    V1(DatabaseV1),
}

pub use processed_store::{DatabaseV1, ProcessedStore};
