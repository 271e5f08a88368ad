use super::entity::Pet;
use super::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ComplianceChecker: Send + Sync {
    /// Whether every required vaccination of the pet is up to date
    async fn check_vaccinations(&self, pet: &Pet) -> Result<bool, DomainError>;

    /// Whether the pet is registered with the municipality
    async fn check_municipal_registration(&self, pet: &Pet) -> Result<bool, DomainError>;
}
