use crate::models::Profile;

/// In-memory profile store.
///
/// Holds the roster in insertion order, which is also the published
/// tie-break order for ranked results. Handlers receive a shared handle
/// through app state; nothing here is process-global.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Look up a profile by id.
    pub fn get_by_id(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.profile_id == id)
    }

    /// Look up a profile by contact address. Exact match; profiles
    /// without a contact address never match.
    pub fn get_by_contact(&self, contact: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.contact_address.as_deref() == Some(contact))
    }

    /// Every profile, in insertion order.
    pub fn list_all(&self) -> &[Profile] {
        &self.profiles
    }

    /// Profiles with a location preference containing `location`, or
    /// contained by it. Case-sensitive, same containment rule the
    /// matcher uses.
    pub fn by_location(&self, location: &str) -> Vec<&Profile> {
        self.profiles
            .iter()
            .filter(|p| {
                p.location_preferences
                    .iter()
                    .any(|own| own.contains(location) || location.contains(own.as_str()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
