use super::policy::RegistrationPolicy;
use crate::domain::pet::{
    compliance::ComplianceChecker,
    entity::Pet,
    errors::{DomainError, messages},
    repository::PetRepository,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Registers pets and removes them from the registry.
///
/// Registration is a fail-fast chain: field validation first, then the
/// external compliance checks, then duplicate detection, and finally the
/// save. The first violated precondition aborts the operation and nothing
/// after it runs.
///
/// Duplicate detection here is a read before the save. Two concurrent
/// registrations of the same id can both pass it, so repositories are
/// expected to reject a duplicate id on save as well.
pub struct RegistrationService {
    repository: Box<dyn PetRepository>,
    compliance: Arc<dyn ComplianceChecker>,
    policy: RegistrationPolicy,
}

impl RegistrationService {
    /// Creates the service with the default registration policy.
    ///
    /// # Arguments
    /// * `repository` - Storage for pet records
    /// * `compliance` - External vaccination and municipal registry checks
    pub fn new(repository: Box<dyn PetRepository>, compliance: Arc<dyn ComplianceChecker>) -> Self {
        info!("Initializing RegistrationService with dependencies");
        Self {
            repository,
            compliance,
            policy: RegistrationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Validates a pet and persists it.
    ///
    /// # Returns
    /// The record returned by the repository's save, unmodified
    ///
    /// # Errors
    /// - `InvalidArgument` when the name is missing or empty, the owner is
    ///   missing, or the owner has no registered phone
    /// - `InvalidState` when a compliance check fails or the id is already
    ///   registered
    /// - Any collaborator error, propagated unchanged
    #[instrument(skip(self, pet), fields(pet_id = ?pet.id, pet_name = ?pet.name))]
    pub async fn register_pet(&self, pet: &Pet) -> Result<Pet, DomainError> {
        self.validate_fields(pet)?;
        debug!("Field validation passed");

        let vaccinated = self
            .compliance
            .check_vaccinations(pet)
            .await
            .inspect_err(|e| error!("Vaccination check failed: {}", e))?;
        if !vaccinated {
            warn!("Rejecting registration: vaccinations not up to date");
            return Err(DomainError::invalid_state(
                messages::VACCINATIONS_OUT_OF_DATE,
            ));
        }

        let registered = self
            .compliance
            .check_municipal_registration(pet)
            .await
            .inspect_err(|e| error!("Municipal registration check failed: {}", e))?;
        if !registered {
            warn!("Rejecting registration: not registered with the municipality");
            return Err(DomainError::invalid_state(
                messages::NOT_MUNICIPALLY_REGISTERED,
            ));
        }
        debug!("Compliance checks passed");

        // An unsaved pet has no id and so cannot match a stored record;
        // the lookup only runs for caller-supplied ids.
        if let Some(id) = pet.id {
            let existing = self
                .repository
                .find_by_id(id)
                .await
                .inspect_err(|e| error!("Duplicate lookup failed for {}: {}", id, e))?;
            if existing.is_some() {
                warn!("Rejecting registration: pet {} already registered", id);
                return Err(DomainError::invalid_state(messages::ALREADY_REGISTERED));
            }
        }

        let saved = self
            .repository
            .save(pet)
            .await
            .inspect_err(|e| error!("Saving pet failed: {}", e))?;

        info!(saved_id = ?saved.id, "Pet registered");
        Ok(saved)
    }

    /// Removes the pet stored under `id`.
    ///
    /// # Errors
    /// `InvalidArgument` if no pet is stored under `id`
    #[instrument(skip(self))]
    pub async fn delete_pet_by_id(&self, id: i64) -> Result<(), DomainError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!("Lookup before delete failed for {}: {}", id, e))?;
        if existing.is_none() {
            warn!("Nothing to delete for pet {}", id);
            return Err(DomainError::invalid_argument(messages::DELETE_NOT_FOUND));
        }

        self.repository
            .delete_by_id(id)
            .await
            .inspect_err(|e| error!("Deleting pet {} failed: {}", id, e))?;

        info!("Pet {} deleted", id);
        Ok(())
    }

    fn validate_fields(&self, pet: &Pet) -> Result<(), DomainError> {
        if pet.registrable_name().is_none() {
            return Err(DomainError::invalid_argument(messages::EMPTY_NAME));
        }

        let owner = pet
            .owner
            .as_ref()
            .ok_or_else(|| DomainError::invalid_argument(messages::MISSING_OWNER))?;

        if !owner.has_phone(!self.policy.reject_blank_phone) {
            return Err(DomainError::invalid_argument(messages::MISSING_PHONE));
        }

        Ok(())
    }
}
