use serde::{Deserialize, Serialize};

/// Core domain entity representing a pet submitted for registration.
///
/// Pets are built by the caller, checked by the registration service and
/// then handed to the repository for persistence. Fields that a caller may
/// leave out are modelled as `Option` so an incomplete submission can be
/// represented and rejected with a precise error.
///
/// # Lifecycle
/// 1. **Submitted** - Constructed by the caller, usually without an `id`
/// 2. **Checked** - Field validation and compliance checks pass
/// 3. **Stored** - Saved by the repository, which may assign the `id`
///
/// # Invariants
/// - A pet is only registrable with a non-empty `name` and an `owner`
/// - The owner must carry a registered phone
/// - An `id` that already resolves to a stored pet marks a duplicate
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Pet {
    /// Identifier assigned by storage; absent until the pet is persisted
    #[serde(default)]
    pub id: Option<i64>,

    /// Pet's name, required and non-empty for registration
    #[serde(default)]
    pub name: Option<String>,

    /// Registered caretaker of the pet
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl Pet {
    /// Creates an unsaved pet with the given name and no owner.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            owner: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Returns the name if it is present and non-empty.
    pub fn registrable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Caretaker of a pet, holding the contact phone used by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub city: String,

    /// Contact phone; `None` when the owner never registered one
    #[serde(default)]
    pub phone: Option<String>,
}

impl Owner {
    pub fn new(name: impl Into<String>, city: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            phone,
        }
    }

    /// Returns true if a phone is registered. Blank phones only count when
    /// `allow_blank` is set.
    pub fn has_phone(&self, allow_blank: bool) -> bool {
        match self.phone.as_deref() {
            Some(phone) => allow_blank || !phone.is_empty(),
            None => false,
        }
    }
}
