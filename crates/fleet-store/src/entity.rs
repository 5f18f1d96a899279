//! Generic state container for one record family.

use fleet_core::Keyed;
use fleet_core::enums::{CrudOp, OpStatus};

/// Holds the currently-viewed record and the full list for one record
/// family, plus one status per CRUD operation.
///
/// Call [`EntityStore::begin`] when a request goes out, then exactly one of
/// the `complete_*` methods (or [`EntityStore::fail`]) when it settles.
/// Server responses merge into `all` by identifier equality: update replaces
/// the matching record, delete removes it.
#[derive(Debug, Clone, Default)]
pub struct EntityStore<T> {
    /// The record most recently fetched or mutated, if any.
    pub current: Option<T>,
    /// Every record fetched by the last list operation, plus local merges.
    pub all: Vec<T>,
    pub create_status: OpStatus,
    pub get_status: OpStatus,
    pub list_status: OpStatus,
    pub update_status: OpStatus,
    pub delete_status: OpStatus,
    /// Message from the most recent failed operation.
    pub error: Option<String>,
}

impl<T: Keyed + Clone> EntityStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: None,
            all: Vec::new(),
            create_status: OpStatus::Idle,
            get_status: OpStatus::Idle,
            list_status: OpStatus::Idle,
            update_status: OpStatus::Idle,
            delete_status: OpStatus::Idle,
            error: None,
        }
    }

    /// Mark `op` as in flight and clear any stale error.
    pub fn begin(&mut self, op: CrudOp) {
        *self.status_mut(op) = OpStatus::IsLoading;
        self.error = None;
    }

    /// Mark `op` as failed and record its message.
    pub fn fail(&mut self, op: CrudOp, message: impl Into<String>) {
        *self.status_mut(op) = OpStatus::Failed;
        self.error = Some(message.into());
    }

    /// A freshly-created record is appended to the list.
    pub fn complete_create(&mut self, record: T) {
        self.create_status = OpStatus::Succeeded;
        self.all.push(record);
    }

    /// A fetched record becomes the currently-viewed one.
    pub fn complete_get(&mut self, record: T) {
        self.get_status = OpStatus::Succeeded;
        self.current = Some(record);
    }

    /// A fetched list replaces the local one wholesale.
    pub fn complete_list(&mut self, records: Vec<T>) {
        self.list_status = OpStatus::Succeeded;
        self.all = records;
    }

    /// An updated record replaces its match in the list; the currently-viewed
    /// record is refreshed when it is the one that changed.
    pub fn complete_update(&mut self, record: T) {
        self.update_status = OpStatus::Succeeded;
        if let Some(existing) = self
            .all
            .iter_mut()
            .find(|r| r.record_id() == record.record_id())
        {
            *existing = record.clone();
        }
        if self
            .current
            .as_ref()
            .is_some_and(|c| c.record_id() == record.record_id())
        {
            self.current = Some(record);
        }
    }

    /// The deleted id drops out of the list; the currently-viewed record is
    /// cleared when it was the one deleted.
    pub fn complete_delete(&mut self, id: &str) {
        self.delete_status = OpStatus::Succeeded;
        self.all.retain(|r| r.record_id() != id);
        if self.current.as_ref().is_some_and(|c| c.record_id() == id) {
            self.current = None;
        }
    }

    /// Status of the given operation.
    #[must_use]
    pub fn status(&self, op: CrudOp) -> OpStatus {
        match op {
            CrudOp::Create => self.create_status,
            CrudOp::Get => self.get_status,
            CrudOp::List => self.list_status,
            CrudOp::Update => self.update_status,
            CrudOp::Delete => self.delete_status,
        }
    }

    fn status_mut(&mut self, op: CrudOp) -> &mut OpStatus {
        match op {
            CrudOp::Create => &mut self.create_status,
            CrudOp::Get => &mut self.get_status,
            CrudOp::List => &mut self.list_status,
            CrudOp::Update => &mut self.update_status,
            CrudOp::Delete => &mut self.delete_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use chrono::NaiveDate;
    use fleet_core::entities::{MovementRegister, MovementRegisterDraft};

    fn record(id: &str, veh: &str) -> MovementRegister {
        MovementRegister {
            id: id.into(),
            created_at: None,
            draft: MovementRegisterDraft::new(
                veh.into(),
                "March".into(),
                "Week 2".into(),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                45_200,
                45_790,
                "J. Ankrah".into(),
            ),
        }
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut store = EntityStore::<MovementRegister>::new();
        store.fail(CrudOp::List, "network down");
        assert_eq!(store.list_status, OpStatus::Failed);
        assert!(store.error.is_some());

        store.begin(CrudOp::List);
        assert_eq!(store.list_status, OpStatus::IsLoading);
        assert!(store.error.is_none());
    }

    #[test]
    fn create_appends_to_list() {
        let mut store = EntityStore::new();
        store.begin(CrudOp::Create);
        store.complete_create(record("a1", "GW-881-22"));
        store.complete_create(record("a2", "GW-882-22"));

        assert_eq!(store.create_status, OpStatus::Succeeded);
        assert_eq!(store.all.len(), 2);
    }

    #[test]
    fn list_replaces_wholesale() {
        let mut store = EntityStore::new();
        store.complete_create(record("stale", "GW-000-00"));
        store.complete_list(vec![record("a1", "GW-881-22")]);

        assert_eq!(store.all.len(), 1);
        assert_eq!(store.all[0].id, "a1");
    }

    #[test]
    fn update_merges_by_id_and_refreshes_current() {
        let mut store = EntityStore::new();
        store.complete_list(vec![record("a1", "GW-881-22"), record("a2", "GW-882-22")]);
        store.complete_get(record("a1", "GW-881-22"));

        store.complete_update(record("a1", "GW-999-25"));

        assert_eq!(store.all[0].draft.veh_number, "GW-999-25");
        assert_eq!(store.all[1].draft.veh_number, "GW-882-22");
        assert_eq!(
            store.current.as_ref().unwrap().draft.veh_number,
            "GW-999-25"
        );
    }

    #[test]
    fn update_of_unlisted_record_leaves_list_alone() {
        let mut store = EntityStore::new();
        store.complete_list(vec![record("a1", "GW-881-22")]);
        store.complete_update(record("zz", "GW-777-19"));

        assert_eq!(store.all.len(), 1);
        assert_eq!(store.all[0].id, "a1");
    }

    #[test]
    fn delete_removes_by_id_and_clears_matching_current() {
        let mut store = EntityStore::new();
        store.complete_list(vec![record("a1", "GW-881-22"), record("a2", "GW-882-22")]);
        store.complete_get(record("a2", "GW-882-22"));

        store.complete_delete("a2");

        assert_eq!(store.delete_status, OpStatus::Succeeded);
        assert_eq!(store.all.len(), 1);
        assert_eq!(store.all[0].id, "a1");
        assert!(store.current.is_none());
    }

    #[test]
    fn delete_of_other_record_keeps_current() {
        let mut store = EntityStore::new();
        store.complete_list(vec![record("a1", "GW-881-22"), record("a2", "GW-882-22")]);
        store.complete_get(record("a1", "GW-881-22"));

        store.complete_delete("a2");

        assert!(store.current.is_some());
    }

    #[test]
    fn statuses_are_tracked_independently() {
        let mut store = EntityStore::<MovementRegister>::new();
        store.begin(CrudOp::Create);
        store.fail(CrudOp::Delete, "not found");

        assert_eq!(store.status(CrudOp::Create), OpStatus::IsLoading);
        assert_eq!(store.status(CrudOp::Delete), OpStatus::Failed);
        assert_eq!(store.status(CrudOp::Get), OpStatus::Idle);
        assert_eq!(store.status(CrudOp::List), OpStatus::Idle);
        assert_eq!(store.status(CrudOp::Update), OpStatus::Idle);
    }
}
