use pet_registry::{
    application::registration::policy::RegistrationPolicy,
    config::Config,
    domain::pet::{
        entity::{Owner, Pet},
        errors::{DomainError, messages},
    },
};

#[test]
fn pet_keeps_the_name_it_was_given() {
    let pet = Pet::new("Guardian");
    assert_eq!(pet.name.as_deref(), Some("Guardian"));
    assert_eq!(pet.id, None);
    assert!(pet.owner.is_none());
}

#[test]
fn owner_keeps_the_name_it_was_given() {
    let owner = Owner::new("Sebastian", "Santi", Some("9898989898".to_string()));
    let pet = Pet::new("Guardian").with_owner(owner.clone());

    assert_eq!(owner.name, "Sebastian");
    assert_eq!(pet.owner.map(|o| o.name), Some("Sebastian".to_string()));
}

#[test]
fn builder_sets_id_and_owner() {
    let owner = Owner::new("Sebastian", "Santiago", Some("5454545454".to_string()));
    let pet = Pet::new("Guardian").with_id(1).with_owner(owner.clone());

    assert_eq!(pet.id, Some(1));
    assert_eq!(pet.owner, Some(owner));
}

#[test]
fn error_kinds_carry_fixed_messages() {
    let err = DomainError::invalid_argument(messages::MISSING_PHONE);
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "owner must have a registered phone");

    let err = DomainError::invalid_state(messages::NOT_MUNICIPALLY_REGISTERED);
    assert!(err.is_invalid_state());
    assert_eq!(err.to_string(), "pet is not registered with the municipality");
}

#[test]
fn default_policy_rejects_blank_phones() {
    assert!(RegistrationPolicy::default().reject_blank_phone);
}

#[test]
fn config_without_overrides_yields_default_policy() {
    let config = Config::from_source(|_: &str| None).expect("defaults always parse");
    assert_eq!(config.registration_policy(), RegistrationPolicy::default());
}
