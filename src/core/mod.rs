pub mod export;
pub mod filter;
pub mod metrics;
pub mod placement;
pub mod session;
pub mod store;

pub use crate::domain::model::{AttachedPart, Part, PartCategory, PartId};
pub use crate::domain::ports::{PartsCatalog, SpecificationTable, StoreEvent, StoreListener};
pub use crate::utils::error::Result;
