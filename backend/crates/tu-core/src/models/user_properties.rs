use crate::{Profile, PropertyFlags, UserProperty};

use std::collections::BTreeMap;
use std::sync::LazyLock;

static USER_PROPERTIES: [UserProperty; 6] = [
    UserProperty::new(
        "username",
        "Username",
        "username",
        PropertyFlags(false, false, false),
        Profile::username,
        Profile::set_username,
    ),
    UserProperty::new(
        "firstName",
        "First Name",
        "first_name",
        PropertyFlags(true, true, false),
        Profile::first_name,
        Profile::set_first_name,
    ),
    UserProperty::new(
        "middleName",
        "Middle Name",
        "middle_name",
        PropertyFlags(false, true, false),
        Profile::middle_name,
        Profile::set_middle_name,
    ),
    UserProperty::new(
        "lastName",
        "Last Name",
        "last_name",
        PropertyFlags(true, true, false),
        Profile::last_name,
        Profile::set_last_name,
    ),
    UserProperty::new(
        "organization",
        "Organization",
        "organization",
        PropertyFlags(true, true, false),
        Profile::organization,
        Profile::set_organization,
    ),
    UserProperty::new(
        "interests",
        "Interests",
        "interests",
        PropertyFlags(false, false, true),
        Profile::interests,
        Profile::set_interests,
    ),
];

static USER_PROPERTY_MAP: LazyLock<BTreeMap<&'static str, &'static UserProperty>> =
    LazyLock::new(|| {
        USER_PROPERTIES
            .iter()
            .map(|property| (property.name(), property))
            .collect()
    });

/// All profile property descriptors, in table order
pub fn user_properties() -> &'static [UserProperty] {
    &USER_PROPERTIES
}

/// Property descriptors keyed by name
pub fn user_property_map() -> &'static BTreeMap<&'static str, &'static UserProperty> {
    &USER_PROPERTY_MAP
}

pub fn user_property(name: &str) -> Option<&'static UserProperty> {
    user_property_map().get(name).copied()
}
