use crate::{Profile, PropertyFlags, UserIdentity};

use std::fmt;

pub type PropertyGetter = fn(&Profile) -> Option<&str>;
pub type PropertySetter = fn(&mut Profile, Option<String>) -> &mut Profile;

/// Descriptor for one named profile property
#[derive(Clone, Copy)]
pub struct UserProperty {
    name: &'static str,
    display_label: &'static str,
    serialization_key: &'static str,
    flags: PropertyFlags,
    getter: PropertyGetter,
    setter: PropertySetter,
}

impl UserProperty {
    pub(crate) const fn new(
        name: &'static str,
        display_label: &'static str,
        serialization_key: &'static str,
        flags: PropertyFlags,
        getter: PropertyGetter,
        setter: PropertySetter,
    ) -> Self {
        Self {
            name,
            display_label,
            serialization_key,
            flags,
            getter,
            setter,
        }
    }

    /// Storage key, unique across the table
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_label(&self) -> &'static str {
        self.display_label
    }

    /// Key used in external key-value payloads
    pub fn serialization_key(&self) -> &'static str {
        self.serialization_key
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    /// Read this property from a user, populating the profile first if needed
    pub fn get(&self, user: &UserIdentity) -> Option<String> {
        user.read_profile(self.getter)
    }

    pub fn set(&self, user: &mut UserIdentity, value: Option<String>) {
        self.set_on(user.profile_mut(), value);
    }

    pub(crate) fn get_from<'a>(&self, profile: &'a Profile) -> Option<&'a str> {
        (self.getter)(profile)
    }

    pub(crate) fn set_on(&self, profile: &mut Profile, value: Option<String>) {
        (self.setter)(profile, value);
    }
}

impl fmt::Debug for UserProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProperty")
            .field("name", &self.name)
            .field("display_label", &self.display_label)
            .field("serialization_key", &self.serialization_key)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
