use super::entity::Pet;
use super::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, DomainError>;
    /// Persists the pet and returns the stored record.
    async fn save(&self, pet: &Pet) -> Result<Pet, DomainError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
