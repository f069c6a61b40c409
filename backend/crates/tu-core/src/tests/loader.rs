use crate::tests::payload;
use crate::{
    CoreError, CoreResult, ProfileLoader, TokenIdentity, UserIdentity, UserInfoLoader,
    UserInfoLoaderSettings, UserInfoPayload,
};

use std::cell::Cell;
use std::rc::Rc;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

/// Loader that counts calls and fails the first `failures` of them
struct CountingLoader {
    calls: Rc<Cell<u32>>,
    failures: u32,
    payload: Option<UserInfoPayload>,
}

impl ProfileLoader for CountingLoader {
    fn load_profile(&self, identity: &TokenIdentity) -> CoreResult<Option<UserInfoPayload>> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call <= self.failures {
            return Err(CoreError::profile_load(identity.user_id(), "unreachable"));
        }
        Ok(self.payload.clone())
    }
}

fn counting_user(failures: u32, payload: Option<UserInfoPayload>) -> (UserIdentity, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let loader = CountingLoader {
        calls: Rc::clone(&calls),
        failures,
        payload,
    };
    let user = UserIdentity::new(10, false, "sig", "jdoe").with_loader(loader);
    (user, calls)
}

// =========================================================================
// Lazy population
// =========================================================================

#[test]
fn given_default_loader_when_read_then_populated_without_fetch() {
    let user = UserIdentity::new(10, false, "sig", "jdoe");

    assert_that!(user.first_name(), none());
    assert_that!(user.is_profile_populated(), eq(true));
}

#[test]
fn given_loader_when_nothing_read_then_not_called() {
    let (user, calls) = counting_user(0, None);

    assert_that!(user.user_id(), eq(10));
    assert_that!(user.stable_id(), eq("jdoe"));
    assert_that!(calls.get(), eq(0));
    assert_that!(user.is_profile_populated(), eq(false));
}

#[test]
fn given_loader_with_payload_when_read_then_fields_populated() {
    let fetched = payload(&[
        ("email", "jane@example.org"),
        ("first_name", "Jane"),
        ("last_name", "Doe"),
    ]);
    let (user, calls) = counting_user(0, Some(fetched));

    assert_that!(user.email(), some(eq("jane@example.org")));
    assert_that!(user.display_name(), eq("Jane Doe"));
    assert_that!(calls.get(), eq(1));
}

#[test]
fn given_completed_fetch_when_read_repeatedly_then_loader_called_once() {
    let (mut user, calls) = counting_user(0, Some(payload(&[("organization", "Acme")])));

    assert_that!(user.organization(), some(eq("Acme")));
    user.set_organization(Some("Initech".to_string()));

    assert_that!(user.organization(), some(eq("Initech")));
    assert_that!(user.interests(), none());
    assert_that!(calls.get(), eq(1));
}

#[test]
fn given_failing_loader_when_read_then_retried_on_next_access() {
    let (user, calls) = counting_user(1, Some(payload(&[("first_name", "Jane")])));

    assert_that!(user.first_name(), none());
    assert_that!(user.is_profile_populated(), eq(false));

    assert_that!(user.first_name(), some(eq("Jane")));
    assert_that!(user.is_profile_populated(), eq(true));
    assert_that!(calls.get(), eq(2));
}

#[test]
fn given_failing_loader_when_ensure_called_then_error_surfaced() {
    let (user, _calls) = counting_user(1, None);

    assert_that!(user.ensure_profile_populated(), err(anything()));
    assert_that!(user.ensure_profile_populated(), ok(anything()));
}

#[test]
fn given_values_set_before_first_read_when_loader_runs_then_unmentioned_values_kept() {
    let (mut user, _calls) = counting_user(0, Some(payload(&[("first_name", "Jane")])));
    user.set_email(Some("claim@example.org".to_string()))
        .set_first_name(Some("Local".to_string()))
        .set_last_name(Some("Doe".to_string()));

    assert_that!(user.first_name(), some(eq("Jane")));
    assert_that!(user.last_name(), some(eq("Doe")));
    assert_that!(user.email(), some(eq("claim@example.org")));
}

#[test]
fn given_bulk_applied_values_when_loader_supplies_other_keys_then_both_present() {
    let (mut user, calls) = counting_user(0, Some(payload(&[("interests", "proteomics")])));
    user.set_property_values(&payload(&[("organization", "Acme")]));

    assert_that!(user.organization(), some(eq("Acme")));
    assert_that!(user.interests(), some(eq("proteomics")));
    assert_that!(calls.get(), eq(1));
}

#[test]
fn given_loaded_payload_with_null_when_read_then_field_cleared() {
    let mut fetched = UserInfoPayload::new();
    fetched.insert("organization".to_string(), serde_json::Value::Null);
    let (mut user, _calls) = counting_user(0, Some(fetched));
    user.set_organization(Some("Acme".to_string()));

    assert_that!(user.organization(), none());
}

// =========================================================================
// UserInfoLoader
// =========================================================================

#[test]
fn given_user_info_source_when_read_then_fetched_with_identity() {
    let source = |identity: &TokenIdentity| -> CoreResult<UserInfoPayload> {
        Ok(payload(&[("username", identity.stable_id())]))
    };
    let loader = UserInfoLoader::new(source, UserInfoLoaderSettings::default());
    let user = UserIdentity::new(11, false, "sig", "jdoe").with_loader(loader);

    assert_that!(user.username(), some(eq("jdoe")));
}

#[test]
fn given_guest_when_fetch_for_guests_disabled_then_source_not_called() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let source = move |_: &TokenIdentity| -> CoreResult<UserInfoPayload> {
        counter.set(counter.get() + 1);
        Ok(payload(&[("first_name", "Jane")]))
    };
    let loader = UserInfoLoader::new(source, UserInfoLoaderSettings::default());
    let user = UserIdentity::new(12, true, "sig", "guest-12").with_loader(loader);

    assert_that!(user.first_name(), none());
    assert_that!(user.is_profile_populated(), eq(true));
    assert_that!(calls.get(), eq(0));
}

#[test]
fn given_guest_when_fetch_for_guests_enabled_then_source_called() {
    let source = |_: &TokenIdentity| -> CoreResult<UserInfoPayload> {
        Ok(payload(&[("first_name", "Jane")]))
    };
    let settings = UserInfoLoaderSettings {
        fetch_for_guests: true,
        ..UserInfoLoaderSettings::default()
    };
    let user = UserIdentity::new(12, true, "sig", "guest-12")
        .with_loader(UserInfoLoader::new(source, settings));

    assert_that!(user.first_name(), some(eq("Jane")));
}

#[test]
fn given_source_always_failing_when_attempts_exhausted_then_unavailable() {
    let source = |identity: &TokenIdentity| -> CoreResult<UserInfoPayload> {
        Err(CoreError::profile_load(identity.user_id(), "connection refused"))
    };
    let settings = UserInfoLoaderSettings {
        max_attempts: 2,
        fetch_for_guests: false,
    };
    let loader = UserInfoLoader::new(source, settings);
    let identity = TokenIdentity::new(13, false, "sig", "jdoe");

    assert!(matches!(
        loader.load_profile(&identity),
        Err(CoreError::ProfileLoad { .. })
    ));
    assert!(matches!(
        loader.load_profile(&identity),
        Err(CoreError::ProfileLoad { .. })
    ));
    assert!(matches!(
        loader.load_profile(&identity),
        Err(CoreError::ProfileUnavailable { attempts: 2, .. })
    ));
    assert_that!(loader.failed_attempts(), eq(2));
}

#[test]
fn given_failure_then_success_when_loading_then_failure_count_resets() {
    let calls = Cell::new(0u32);
    let source = |identity: &TokenIdentity| -> CoreResult<UserInfoPayload> {
        calls.set(calls.get() + 1);
        if calls.get() == 1 {
            Err(CoreError::profile_load(identity.user_id(), "timeout"))
        } else {
            Ok(UserInfoPayload::new())
        }
    };
    let loader = UserInfoLoader::new(source, UserInfoLoaderSettings::default());
    let identity = TokenIdentity::new(14, false, "sig", "jdoe");

    assert_that!(loader.load_profile(&identity), err(anything()));
    assert_that!(loader.failed_attempts(), eq(1));
    assert_that!(loader.load_profile(&identity), ok(some(anything())));
    assert_that!(loader.failed_attempts(), eq(0));
}

#[test]
fn given_attempts_exhausted_when_read_then_partial_profile_and_unpopulated() {
    let source = |identity: &TokenIdentity| -> CoreResult<UserInfoPayload> {
        Err(CoreError::profile_load(identity.user_id(), "connection refused"))
    };
    let settings = UserInfoLoaderSettings {
        max_attempts: 1,
        fetch_for_guests: false,
    };
    let mut user = UserIdentity::new(15, false, "sig", "jdoe")
        .with_loader(UserInfoLoader::new(source, settings));
    user.set_organization(Some("Acme".to_string()));

    assert_that!(user.organization(), some(eq("Acme")));
    assert_that!(user.first_name(), none());
    assert_that!(user.is_profile_populated(), eq(false));
    assert!(matches!(
        user.ensure_profile_populated(),
        Err(CoreError::ProfileUnavailable { attempts: 1, .. })
    ));
}
