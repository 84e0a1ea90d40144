use crate::domain::model::{BaseSpecification, Part, PartId};

/// Read-only source of purchasable parts and the bike lineup they fit.
pub trait PartsCatalog {
    fn parts(&self) -> &[Part];

    fn part(&self, id: PartId) -> Option<&Part> {
        self.parts().iter().find(|p| p.id == id)
    }

    fn brands(&self) -> Vec<String>;
    fn models(&self, brand: &str) -> Vec<String>;
    fn engines(&self, model: &str) -> Vec<String>;
}

pub trait SpecificationTable {
    fn base_spec(&self, model: &str) -> Option<BaseSpecification>;
}

/// Notification sent to store listeners after a mutation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Attached { id: PartId, replaced: bool },
    Removed { id: PartId, cleared_selection: bool },
    Selected { id: Option<PartId> },
}

pub trait StoreListener {
    fn on_change(&mut self, event: &StoreEvent);
}

impl<F> StoreListener for F
where
    F: FnMut(&StoreEvent),
{
    fn on_change(&mut self, event: &StoreEvent) {
        self(event)
    }
}
