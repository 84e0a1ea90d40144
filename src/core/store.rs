use crate::core::metrics;
use crate::domain::model::{AttachedPart, PartId};
use crate::domain::ports::{StoreEvent, StoreListener};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The set of parts mounted on the bike during one editing session, plus the
/// part the user currently has highlighted.
///
/// Attached parts are unique by id and keep insertion order; re-attaching an
/// id swaps the entry in place. Selection is a plain pointer and is not
/// checked against the attached set or the catalog.
#[derive(Default)]
pub struct CustomizationStore {
    attached_parts: Vec<AttachedPart>,
    selected_part_id: Option<PartId>,
    listeners: Vec<(ListenerId, Box<dyn StoreListener>)>,
    next_listener: u64,
}

impl CustomizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_parts(&self) -> &[AttachedPart] {
        &self.attached_parts
    }

    pub fn selected_part_id(&self) -> Option<PartId> {
        self.selected_part_id
    }

    pub fn is_attached(&self, id: PartId) -> bool {
        self.attached_parts.iter().any(|p| p.id() == id)
    }

    pub fn attach(&mut self, part: AttachedPart) {
        let id = part.id();
        let replaced = match self.attached_parts.iter().position(|p| p.id() == id) {
            Some(index) => {
                tracing::warn!(part_id = %id, index, "Replacing attached part");
                self.attached_parts[index] = part;
                true
            }
            None => {
                tracing::debug!(part_id = %id, "Attaching part");
                self.attached_parts.push(part);
                false
            }
        };
        self.notify(StoreEvent::Attached { id, replaced });
    }

    /// Removing an id that is not attached is a no-op and emits nothing.
    pub fn remove(&mut self, id: PartId) {
        let before = self.attached_parts.len();
        self.attached_parts.retain(|p| p.id() != id);
        if self.attached_parts.len() == before {
            tracing::warn!(part_id = %id, "Remove ignored, part not attached");
            return;
        }

        let cleared_selection = self.selected_part_id == Some(id);
        if cleared_selection {
            self.selected_part_id = None;
        }
        tracing::debug!(part_id = %id, cleared_selection, "Removed part");
        self.notify(StoreEvent::Removed {
            id,
            cleared_selection,
        });
    }

    pub fn select(&mut self, id: Option<PartId>) {
        self.selected_part_id = id;
        tracing::debug!(part_id = ?id, "Selection changed");
        self.notify(StoreEvent::Selected { id });
    }

    pub fn total_weight(&self) -> f64 {
        metrics::total_weight(&self.attached_parts)
    }

    pub fn total_price(&self) -> f64 {
        metrics::total_price(&self.attached_parts)
    }

    pub fn calculated_mileage(&self, base_mileage: f64) -> f64 {
        metrics::calculated_mileage(&self.attached_parts, base_mileage)
    }

    pub fn calculated_top_speed(&self, base_speed: f64) -> f64 {
        metrics::calculated_top_speed(&self.attached_parts, base_speed)
    }

    pub fn calculated_torque(&self, base_torque: f64) -> f64 {
        metrics::calculated_torque(&self.attached_parts, base_torque)
    }

    pub fn calculated_power(&self, base_power: f64) -> f64 {
        metrics::calculated_power(&self.attached_parts, base_power)
    }

    /// Registers a listener that is called after every applied mutation.
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: StoreListener + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_change(&event);
        }
    }
}

impl std::fmt::Debug for CustomizationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomizationStore")
            .field("attached_parts", &self.attached_parts)
            .field("selected_part_id", &self.selected_part_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
