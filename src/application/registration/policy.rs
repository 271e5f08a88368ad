/// Configurable validation rules applied by the registration service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Reject an owner whose phone is present but empty, the same way a
    /// missing phone is rejected
    pub reject_blank_phone: bool,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            reject_blank_phone: true,
        }
    }
}
