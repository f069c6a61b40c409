use crate::payload::UserInfoPayload;
use crate::{
    CoreResult, NoProfileLoader, Profile, ProfileLoader, PropertyGetter, TokenIdentity,
    UserProperty, user_properties,
};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, warn};
use serde_json::Value;

pub const GUEST_DISPLAY_NAME: &str = "Guest User";

/// An authenticated end user.
///
/// The token-derived identity never changes after construction. The profile
/// is mutable and is populated on first read through the injected
/// [`ProfileLoader`]. A loaded payload only overwrites the fields it names;
/// values set before the first read survive otherwise.
///
/// Equality and hashing consider only the numeric user id.
pub struct UserIdentity {
    identity: TokenIdentity,
    profile: RefCell<Profile>,
    populated: Cell<bool>,
    loader: Box<dyn ProfileLoader>,
}

impl UserIdentity {
    pub fn new(
        user_id: i64,
        is_guest: bool,
        signature: impl Into<String>,
        stable_id: impl Into<String>,
    ) -> Self {
        Self::from_identity(TokenIdentity::new(user_id, is_guest, signature, stable_id))
    }

    pub fn from_identity(identity: TokenIdentity) -> Self {
        Self {
            identity,
            profile: RefCell::new(Profile::default()),
            populated: Cell::new(false),
            loader: Box::new(NoProfileLoader),
        }
    }

    /// Replace the profile loader. The profile is treated as not yet populated.
    pub fn with_loader(mut self, loader: impl ProfileLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self.populated.set(false);
        self
    }

    pub fn identity(&self) -> &TokenIdentity {
        &self.identity
    }

    pub fn user_id(&self) -> i64 {
        self.identity.user_id()
    }

    pub fn is_guest(&self) -> bool {
        self.identity.is_guest()
    }

    pub fn signature(&self) -> &str {
        self.identity.signature()
    }

    pub fn stable_id(&self) -> &str {
        self.identity.stable_id()
    }

    pub fn is_profile_populated(&self) -> bool {
        self.populated.get()
    }

    /// Run the profile loader unless a previous run already completed.
    ///
    /// A failed load leaves the profile unpopulated so the next call retries.
    pub fn ensure_profile_populated(&self) -> CoreResult<()> {
        if self.populated.get() {
            return Ok(());
        }

        if let Some(payload) = self.loader.load_profile(&self.identity)? {
            debug!("Applying loaded profile for user #{}", self.user_id());
            self.profile.borrow_mut().merge_user_info(&payload);
        }
        self.populated.set(true);

        Ok(())
    }

    /// Read a profile field, running the loader first.
    ///
    /// A failed load is only logged and the current (possibly incomplete)
    /// value is returned. Callers that must know whether the profile was
    /// loaded check [`is_profile_populated`](Self::is_profile_populated) or
    /// call [`ensure_profile_populated`](Self::ensure_profile_populated).
    pub(crate) fn read_profile(&self, getter: PropertyGetter) -> Option<String> {
        if let Err(e) = self.ensure_profile_populated() {
            warn!("Reading unpopulated profile for user #{}: {}", self.user_id(), e);
        }
        let profile = self.profile.borrow();
        getter(&profile).map(str::to_owned)
    }

    pub(crate) fn profile_mut(&mut self) -> &mut Profile {
        self.profile.get_mut()
    }

    /// Clone of the current profile, populated first if needed
    pub fn profile_snapshot(&self) -> Profile {
        if let Err(e) = self.ensure_profile_populated() {
            warn!("Snapshot of unpopulated profile for user #{}: {}", self.user_id(), e);
        }
        self.profile.borrow().clone()
    }

    /// Email address, loading the profile first.
    ///
    /// This and the other profile getters never fail. After a failed load they
    /// return what is currently set; see
    /// [`ensure_profile_populated`](Self::ensure_profile_populated).
    pub fn email(&self) -> Option<String> {
        self.read_profile(Profile::email)
    }

    pub fn set_email(&mut self, email: Option<String>) -> &mut Self {
        self.profile_mut().set_email(email);
        self
    }

    pub fn username(&self) -> Option<String> {
        self.read_profile(Profile::username)
    }

    pub fn set_username(&mut self, username: Option<String>) -> &mut Self {
        self.profile_mut().set_username(username);
        self
    }

    pub fn first_name(&self) -> Option<String> {
        self.read_profile(Profile::first_name)
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) -> &mut Self {
        self.profile_mut().set_first_name(first_name);
        self
    }

    pub fn middle_name(&self) -> Option<String> {
        self.read_profile(Profile::middle_name)
    }

    pub fn set_middle_name(&mut self, middle_name: Option<String>) -> &mut Self {
        self.profile_mut().set_middle_name(middle_name);
        self
    }

    pub fn last_name(&self) -> Option<String> {
        self.read_profile(Profile::last_name)
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) -> &mut Self {
        self.profile_mut().set_last_name(last_name);
        self
    }

    pub fn organization(&self) -> Option<String> {
        self.read_profile(Profile::organization)
    }

    pub fn set_organization(&mut self, organization: Option<String>) -> &mut Self {
        self.profile_mut().set_organization(organization);
        self
    }

    pub fn interests(&self) -> Option<String> {
        self.read_profile(Profile::interests)
    }

    pub fn set_interests(&mut self, interests: Option<String>) -> &mut Self {
        self.profile_mut().set_interests(interests);
        self
    }

    /// Set every profile property from a payload keyed by serialization key.
    ///
    /// Properties whose key is absent are cleared.
    pub fn set_property_values(&mut self, payload: &UserInfoPayload) {
        self.profile_mut().apply_properties(payload);
    }

    /// Every property descriptor paired with its current value, in table order
    pub fn property_values(&self) -> Vec<(&'static UserProperty, Option<String>)> {
        user_properties()
            .iter()
            .map(|property| (property, property.get(self)))
            .collect()
    }

    /// Serialize the set properties back into a payload keyed by serialization key
    pub fn to_payload(&self) -> UserInfoPayload {
        let profile = self.profile_snapshot();
        user_properties()
            .iter()
            .filter_map(|property| {
                property.get_from(&profile).map(|value| {
                    (
                        property.serialization_key().to_string(),
                        Value::String(value.to_string()),
                    )
                })
            })
            .collect()
    }

    /// "Pretty" name: the guest label for guests, otherwise first, middle and
    /// last name joined by single spaces.
    pub fn display_name(&self) -> String {
        if self.is_guest() {
            return GUEST_DISPLAY_NAME.to_string();
        }

        let name: String = [self.first_name(), self.middle_name(), self.last_name()]
            .iter()
            .map(|part| format_name_part(part.as_deref()))
            .collect();

        name.trim().to_string()
    }
}

fn format_name_part(part: Option<&str>) -> String {
    match part.map(str::trim) {
        Some(part) if !part.is_empty() => format!(" {part}"),
        _ => String::new(),
    }
}

impl PartialEq for UserIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.user_id() == other.user_id()
    }
}

impl Eq for UserIdentity {}

impl Hash for UserIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id().hash(state);
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let email = self.email();
        write!(
            f,
            "User #{} - {}",
            self.user_id(),
            email.as_deref().unwrap_or("none")
        )
    }
}

impl fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserIdentity")
            .field("identity", &self.identity)
            .field("profile", &self.profile.borrow())
            .field("populated", &self.populated.get())
            .finish_non_exhaustive()
    }
}
