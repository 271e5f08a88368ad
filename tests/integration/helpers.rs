use async_trait::async_trait;
use mockall::mock;
use pet_registry::{
    application::registration::service::RegistrationService,
    domain::pet::{
        compliance::ComplianceChecker,
        entity::{Owner, Pet},
        errors::DomainError,
        repository::PetRepository,
    },
    telemetry::init_tracing,
};
use std::sync::{Arc, Once};

mock! {
    pub PetRepo {}

    #[async_trait]
    impl PetRepository for PetRepo {
        async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, DomainError>;
        async fn save(&self, pet: &Pet) -> Result<Pet, DomainError>;
        async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
    }
}

mock! {
    pub Compliance {}

    #[async_trait]
    impl ComplianceChecker for Compliance {
        async fn check_vaccinations(&self, pet: &Pet) -> Result<bool, DomainError>;
        async fn check_municipal_registration(&self, pet: &Pet) -> Result<bool, DomainError>;
    }
}

static TRACING: Once = Once::new();

pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = init_tracing("debug");
    });
}

pub fn build_service(repo: MockPetRepo, compliance: MockCompliance) -> RegistrationService {
    init_test_tracing();
    RegistrationService::new(Box::new(repo), Arc::new(compliance))
}

pub fn owner_with_phone(phone: Option<&str>) -> Owner {
    Owner::new("Sebastian", "Santiago", phone.map(str::to_string))
}

/// Guardian, owned by Sebastian from Santiago, with a registered phone.
pub fn guardian() -> Pet {
    Pet::new("Guardian").with_owner(owner_with_phone(Some("5454545454")))
}

/// Compliance mock whose checks answer `vaccinated` and `registered`.
/// A `None` answer means the check must not be called.
pub fn compliance_answering(vaccinated: Option<bool>, registered: Option<bool>) -> MockCompliance {
    let mut compliance = MockCompliance::new();
    match vaccinated {
        Some(answer) => {
            compliance
                .expect_check_vaccinations()
                .times(1)
                .returning(move |_| Ok(answer));
        }
        None => {
            compliance.expect_check_vaccinations().never();
        }
    }
    match registered {
        Some(answer) => {
            compliance
                .expect_check_municipal_registration()
                .times(1)
                .returning(move |_| Ok(answer));
        }
        None => {
            compliance.expect_check_municipal_registration().never();
        }
    }
    compliance
}

/// Repository mock that must not be touched at all.
pub fn untouched_repo() -> MockPetRepo {
    let mut repo = MockPetRepo::new();
    repo.expect_find_by_id().never();
    repo.expect_save().never();
    repo.expect_delete_by_id().never();
    repo
}

pub fn assert_invalid_argument(result: Result<Pet, DomainError>, expected: &str) {
    match result {
        Err(DomainError::InvalidArgument(message)) => assert_eq!(message, expected),
        other => panic!("expected InvalidArgument({:?}), got {:?}", expected, other),
    }
}

pub fn assert_invalid_state(result: Result<Pet, DomainError>, expected: &str) {
    match result {
        Err(DomainError::InvalidState(message)) => assert_eq!(message, expected),
        other => panic!("expected InvalidState({:?}), got {:?}", expected, other),
    }
}
