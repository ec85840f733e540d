use absential::Absential;

///
/// Profile
///
/// The record being updated. `nickname` and `age` are genuinely nullable:
/// clearing them is a legitimate edit.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    pub name: String,
    pub nickname: Option<String>,
    pub age: Option<u8>,
}

///
/// ProfilePatch
///
/// A partial update. Each field is either supplied (possibly with a null)
/// or not supplied at all; only supplied fields touch the record. The
/// default patch supplies nothing.
///

#[derive(Clone, Debug, Default)]
pub struct ProfilePatch {
    pub name: Absential<String>,
    pub nickname: Absential<Option<String>>,
    pub age: Absential<Option<u8>>,
}

impl Profile {
    /// Apply a patch, merging exactly the supplied fields.
    #[must_use]
    pub fn apply(mut self, patch: ProfilePatch) -> Self {
        patch.name.merge_into(&mut self.name);
        patch.nickname.merge_into(&mut self.nickname);
        patch.age.merge_into(&mut self.age);

        self
    }
}

///
/// TESTS
///
