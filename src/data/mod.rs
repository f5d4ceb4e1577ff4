//! Read and write paths used by the pages.
//!
//! Each read tries the remote document collections first and, when they
//! fail, answers from the in-process [`MockStore`] instead. The caller always
//! learns which of the two produced the data through [`Source`].

use crate::domain::{
    Appeal, AppealPatch, AppealStatus, Attachment, Denial, DenialPatch, DenialStats,
    DenialStatus, DocumentRecord, DocumentTarget, NewAppeal, NewDenial, Priority,
};
use crate::remote::{
    create_from, list_as, Collection, DocumentStore, FileStorage, ListQuery, RemoteError,
    UploadOptions,
};
use crate::store::{new_id, Clock, MockStore, SystemClock};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{info, warn};

/// Whose records a request works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
    /// Signed-in user, by owner id.
    User(String),
    /// The user could not be resolved; the remote is skipped and the mock
    /// store is read for the fallback owner.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: T,
    pub source: Source,
}

impl<T> Loaded<T> {
    fn remote(items: T) -> Self {
        Self {
            items,
            source: Source::Remote,
        }
    }

    fn fallback(items: T) -> Self {
        Self {
            items,
            source: Source::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }
}

/// Appeals together with the denials they point at, keyed by denial id.
/// Dangling references simply have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppealBoard {
    pub appeals: Vec<Appeal>,
    pub denials: HashMap<String, Denial>,
}

impl AppealBoard {
    fn join(appeals: Vec<Appeal>, denials: Vec<Denial>) -> Self {
        let wanted: BTreeSet<&str> = appeals.iter().map(|a| a.denial_id.as_str()).collect();
        let denials = denials
            .into_iter()
            .filter(|d| wanted.contains(d.id.as_str()))
            .map(|d| (d.id.clone(), d))
            .collect();
        Self { appeals, denials }
    }
}

pub struct DataAccess {
    store: Arc<MockStore>,
    docs: Arc<dyn DocumentStore>,
    files: Arc<dyn FileStorage>,
    clock: Arc<dyn Clock>,
    fallback_owner: String,
}

impl DataAccess {
    pub fn new(
        store: Arc<MockStore>,
        docs: Arc<dyn DocumentStore>,
        files: Arc<dyn FileStorage>,
        fallback_owner: impl Into<String>,
    ) -> Self {
        Self {
            store,
            docs,
            files,
            clock: Arc::new(SystemClock),
            fallback_owner: fallback_owner.into(),
        }
    }

    pub fn store(&self) -> &MockStore {
        &self.store
    }

    /// Owner id the mock store is read with.
    pub fn owner_id<'a>(&'a self, owner: &'a Owner) -> &'a str {
        match owner {
            Owner::User(id) => id,
            Owner::Fallback => &self.fallback_owner,
        }
    }

    fn remote_list<T: serde::de::DeserializeOwned>(
        &self,
        owner: &Owner,
        collection: Collection,
        query: impl FnOnce(ListQuery) -> ListQuery,
    ) -> Option<Vec<T>> {
        let Owner::User(id) = owner else {
            return None;
        };
        match list_as(self.docs.as_ref(), collection, &query(ListQuery::owned_by(id))) {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(collection = collection.name(), owner = %id, error = %e, "remote read failed, using mock data");
                None
            }
        }
    }

    // ---- reads ----

    pub fn load_denials(&self, owner: &Owner) -> Loaded<Vec<Denial>> {
        match self.remote_list(owner, Collection::Denials, |q| q) {
            Some(rows) => Loaded::remote(rows),
            None => Loaded::fallback(self.store.list_denials(self.owner_id(owner))),
        }
    }

    pub fn load_appeals(&self, owner: &Owner) -> Loaded<Vec<Appeal>> {
        match self.remote_list(owner, Collection::Appeals, |q| q) {
            Some(rows) => Loaded::remote(rows),
            None => Loaded::fallback(self.store.list_appeals(self.owner_id(owner))),
        }
    }

    /// Counts come from whichever source served both collections; if either
    /// read falls back, the mock store answers for both.
    pub fn load_stats(&self, owner: &Owner) -> Loaded<DenialStats> {
        let denials = self.load_denials(owner);
        if !denials.is_fallback() {
            let appeals = self.load_appeals(owner);
            if !appeals.is_fallback() {
                return Loaded::remote(DenialStats::compute(&denials.items, &appeals.items));
            }
        }
        Loaded::fallback(self.store.get_stats(self.owner_id(owner)))
    }

    /// Appeals and their denials come from one source. If the remote serves
    /// the appeals but not the denial lookup, both are read from the mock store.
    pub fn load_appeal_board(&self, owner: &Owner) -> Loaded<AppealBoard> {
        let appeals = self.load_appeals(owner);
        if !appeals.is_fallback() {
            let ids = appeals
                .items
                .iter()
                .map(|a| a.denial_id.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            if let Some(denials) =
                self.remote_list::<Denial>(owner, Collection::Denials, |q| q.with_ids(ids))
            {
                return Loaded::remote(AppealBoard::join(appeals.items, denials));
            }
        }

        let owner_id = self.owner_id(owner);
        Loaded::fallback(AppealBoard::join(
            self.store.list_appeals(owner_id),
            self.store.list_denials(owner_id),
        ))
    }

    // ---- creates ----

    pub fn create_denial(
        &self,
        owner: &Owner,
        fields: NewDenial,
        attachments: Vec<Attachment>,
    ) -> Loaded<Denial> {
        let created = match owner {
            Owner::User(id) => {
                let now = self.clock.now();
                let denial = fields.clone().into_denial(new_id("denial", now), id, now);
                match create_from(self.docs.as_ref(), Collection::Denials, &denial) {
                    Ok(()) => Loaded::remote(denial),
                    Err(e) => {
                        warn!(owner = %id, error = %e, "remote create failed, storing denial locally");
                        Loaded::fallback(self.store.create_denial(id, fields))
                    }
                }
            }
            Owner::Fallback => Loaded::fallback(self.store.create_denial(&self.fallback_owner, fields)),
        };

        info!(id = %created.items.id, source = ?created.source, "denial created");
        self.attach_all(owner, DocumentTarget::Denial(created.items.id.clone()), attachments);
        created
    }

    pub fn create_appeal(
        &self,
        owner: &Owner,
        fields: NewAppeal,
        attachments: Vec<Attachment>,
    ) -> Loaded<Appeal> {
        let created = match owner {
            Owner::User(id) => {
                let now = self.clock.now();
                let appeal = fields.clone().into_appeal(new_id("appeal", now), id, now);
                match create_from(self.docs.as_ref(), Collection::Appeals, &appeal) {
                    Ok(()) => Loaded::remote(appeal),
                    Err(e) => {
                        warn!(owner = %id, error = %e, "remote create failed, storing appeal locally");
                        Loaded::fallback(self.store.create_appeal(id, fields))
                    }
                }
            }
            Owner::Fallback => Loaded::fallback(self.store.create_appeal(&self.fallback_owner, fields)),
        };

        info!(id = %created.items.id, source = ?created.source, "appeal created");
        self.attach_all(owner, DocumentTarget::Appeal(created.items.id.clone()), attachments);
        created
    }

    fn attach_all(&self, owner: &Owner, target: DocumentTarget, attachments: Vec<Attachment>) {
        for attachment in attachments {
            if let Err(e) = self.attach_document(owner, &target, &attachment) {
                warn!(file = %attachment.file_name, error = %e, "attachment skipped");
            }
        }
    }

    /// Uploads the file under the record's folder, then writes its metadata
    /// to the documents collection.
    pub fn attach_document(
        &self,
        owner: &Owner,
        target: &DocumentTarget,
        attachment: &Attachment,
    ) -> Result<DocumentRecord, RemoteError> {
        let path = format!("{}/{}", target.storage_folder(), attachment.safe_file_name());
        let url = self.files.upload(
            &attachment.bytes,
            &path,
            &UploadOptions {
                upsert: true,
                content_type: attachment.content_type.clone(),
            },
        )?;

        let now = self.clock.now();
        let record = DocumentRecord::new(
            new_id("doc", now),
            target,
            self.owner_id(owner),
            attachment,
            url,
            now,
        );
        create_from(self.docs.as_ref(), Collection::Documents, &record)?;
        info!(path = %path, size = record.file_size, "document attached");
        Ok(record)
    }

    // ---- mutations (mock store only) ----

    fn owns_denial(&self, owner: &Owner, id: &str) -> bool {
        self.store
            .get_denial(id)
            .is_some_and(|d| d.user_id == self.owner_id(owner))
    }

    fn owns_appeal(&self, owner: &Owner, id: &str) -> bool {
        self.store
            .get_appeal(id)
            .is_some_and(|a| a.user_id == self.owner_id(owner))
    }

    pub fn update_denial_status(
        &self,
        owner: &Owner,
        id: &str,
        status: DenialStatus,
    ) -> Option<Denial> {
        if !self.owns_denial(owner, id) {
            return None;
        }
        let updated = self.store.update_denial(id, DenialPatch::status(status))?;
        info!(id, status = status.as_str(), "denial status changed");
        Some(updated)
    }

    pub fn update_denial_priority(
        &self,
        owner: &Owner,
        id: &str,
        priority: Priority,
    ) -> Option<Denial> {
        if !self.owns_denial(owner, id) {
            return None;
        }
        let updated = self.store.update_denial(id, DenialPatch::priority(priority))?;
        info!(id, priority = priority.as_str(), "denial priority changed");
        Some(updated)
    }

    pub fn delete_denial(&self, owner: &Owner, id: &str) -> bool {
        let deleted = self.owns_denial(owner, id) && self.store.delete_denial(id);
        if deleted {
            info!(id, "denial deleted");
        }
        deleted
    }

    pub fn update_appeal_status(
        &self,
        owner: &Owner,
        id: &str,
        status: AppealStatus,
    ) -> Option<Appeal> {
        if !self.owns_appeal(owner, id) {
            return None;
        }
        let updated = self.store.update_appeal(id, AppealPatch::status(status))?;
        info!(id, status = status.as_str(), "appeal status changed");
        Some(updated)
    }

    pub fn delete_appeal(&self, owner: &Owner, id: &str) -> bool {
        let deleted = self.owns_appeal(owner, id) && self.store.delete_appeal(id);
        if deleted {
            info!(id, "appeal deleted");
        }
        deleted
    }
}
