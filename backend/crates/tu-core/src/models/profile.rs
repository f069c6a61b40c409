use crate::models::user_properties::user_properties;
use crate::payload::{UserInfoPayload, payload_value};

use serde::{Deserialize, Serialize};

const EMAIL_KEY: &str = "email";

/// Mutable profile half of a user: email plus the six profile properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    email: Option<String>,
    username: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    organization: Option<String>,
    interests: Option<String>,
}

impl Profile {
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) -> &mut Self {
        self.email = email;
        self
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: Option<String>) -> &mut Self {
        self.username = username;
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) -> &mut Self {
        self.first_name = first_name;
        self
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn set_middle_name(&mut self, middle_name: Option<String>) -> &mut Self {
        self.middle_name = middle_name;
        self
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) -> &mut Self {
        self.last_name = last_name;
        self
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn set_organization(&mut self, organization: Option<String>) -> &mut Self {
        self.organization = organization;
        self
    }

    pub fn interests(&self) -> Option<&str> {
        self.interests.as_deref()
    }

    pub fn set_interests(&mut self, interests: Option<String>) -> &mut Self {
        self.interests = interests;
        self
    }

    /// Run every property setter with the payload value at its serialization key.
    ///
    /// A missing key still invokes the setter with `None`, clearing the field.
    pub fn apply_properties(&mut self, payload: &UserInfoPayload) {
        for property in user_properties() {
            property.set_on(self, payload_value(payload, property.serialization_key()));
        }
    }

    /// Merge a loaded user-info payload: `email` and the properties whose key
    /// is present are overwritten, everything else is kept.
    pub(crate) fn merge_user_info(&mut self, payload: &UserInfoPayload) {
        if payload.contains_key(EMAIL_KEY) {
            self.email = payload_value(payload, EMAIL_KEY);
        }
        for property in user_properties() {
            let key = property.serialization_key();
            if payload.contains_key(key) {
                property.set_on(self, payload_value(payload, key));
            }
        }
    }
}
