use crate::domain::pet::{
    entity::Pet,
    errors::{DomainError, messages},
    repository::PetRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

struct Store {
    pets: BTreeMap<i64, Pet>,
    /// `None` once `i64::MAX` has been handed out
    next_id: Option<i64>,
}

/// Process-local `PetRepository` keyed by pet id.
///
/// The uniqueness check and the insert happen under one lock, so a
/// duplicate id is rejected on save even when two registrations race past
/// the service's lookup.
pub struct InMemoryPetRepository {
    store: Mutex<Store>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        info!("Initializing InMemoryPetRepository");
        Self {
            store: Mutex::new(Store {
                pets: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.pets.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.pets.is_empty()
    }
}

impl Default for InMemoryPetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, DomainError> {
        Ok(self.store.lock().await.pets.get(&id).cloned())
    }

    /// Stores the pet, assigning the next free id when it has none.
    ///
    /// # Errors
    /// - `InvalidState` if a pet with the same id is already stored
    /// - `InfrastructureError` if the pet has no id and every id is used up
    #[instrument(skip(self, pet), fields(pet_id = ?pet.id))]
    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError> {
        let mut store = self.store.lock().await;

        let id = match pet.id.or(store.next_id) {
            Some(id) => id,
            None => {
                error!("Pet id sequence exhausted");
                return Err(DomainError::InfrastructureError(
                    "pet id sequence exhausted".to_string(),
                ));
            }
        };
        if store.pets.contains_key(&id) {
            return Err(DomainError::invalid_state(messages::ALREADY_REGISTERED));
        }
        store.next_id = match id.checked_add(1) {
            Some(following) => store.next_id.map(|next| next.max(following)),
            None => None,
        };

        let stored = Pet {
            id: Some(id),
            ..pet.clone()
        };
        store.pets.insert(id, stored.clone());
        debug!("Stored pet {}, {} pets in store", id, store.pets.len());

        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.store
            .lock()
            .await
            .pets
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::invalid_argument(messages::DELETE_NOT_FOUND))
    }
}
