//! Behavioural tests for whole-form validation and submission.
//!
//! These tests exercise the public API against Gherkin scenarios covering
//! both validation profiles, the terms requirement and submission.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use transfer_form::{
    SubmissionError, SubmittedTransfer, TransferForm, TransferFormErrors, ValidationProfile,
    submit_transfer,
};

// ============================================================================
// Test fixtures
// ============================================================================

/// Test world holding the form under test and the outcomes of acting on it.
#[derive(Default, ScenarioState)]
struct World {
    form: Slot<TransferForm>,
    profile: Slot<ValidationProfile>,
    errors: Slot<TransferFormErrors>,
    submission: Slot<Result<SubmittedTransfer, SubmissionError>>,
}

impl World {
    fn form(&self) -> TransferForm {
        self.form.get().expect("form should be set")
    }

    fn errors(&self) -> TransferFormErrors {
        self.errors.get().expect("form should be validated")
    }

    fn failing_fields(&self) -> Vec<&'static str> {
        self.errors().iter().map(|(field, _)| field).collect()
    }

    fn submission(&self) -> Result<SubmittedTransfer, SubmissionError> {
        self.submission.get().expect("form should be submitted")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn validate_under(world: &World, profile: ValidationProfile) {
    let errors = world.form().validate(profile);
    world.profile.set(profile);
    world.errors.set(errors);
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a complete transfer form")]
fn a_complete_transfer_form(world: &World) {
    world.form.set(TransferForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        amount: 25.0,
        currency: "EUR".to_owned(),
        text: "Rent for October".to_owned(),
        terms: true,
    });
}

#[given("a transfer form with every field invalid")]
fn a_transfer_form_with_every_field_invalid(world: &World) {
    world.form.set(TransferForm {
        name: "Al".to_owned(),
        email: "al@test".to_owned(),
        amount: -5.0,
        currency: String::new(),
        text: "hi".to_owned(),
        terms: false,
    });
}

#[given("the amount is {amount:u32}")]
fn the_amount_is(world: &World, amount: u32) {
    let mut form = world.form();
    form.amount = f64::from(amount);
    world.form.set(form);
}

#[given("the terms are not accepted")]
fn the_terms_are_not_accepted(world: &World) {
    let mut form = world.form();
    form.terms = false;
    world.form.set(form);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the form is validated under the plain profile")]
fn validated_under_plain(world: &World) {
    validate_under(world, ValidationProfile::Plain);
}

#[when("the form is validated under the schema profile")]
fn validated_under_schema(world: &World) {
    validate_under(world, ValidationProfile::Schema);
}

#[when("the form is submitted under the plain profile")]
fn submitted_under_plain(world: &World) {
    let result = submit_transfer(&world.form(), ValidationProfile::Plain);
    world.submission.set(result);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("no field reports an error")]
fn no_field_reports_an_error(world: &World) {
    let errors = world.errors();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[then("only the amount field reports an error")]
fn only_the_amount_field_reports_an_error(world: &World) {
    assert_eq!(world.failing_fields(), ["amount"]);
}

#[then("only the terms field reports an error")]
fn only_the_terms_field_reports_an_error(world: &World) {
    assert_eq!(world.failing_fields(), ["terms"]);
}

#[then("every field reports an error")]
fn every_field_reports_an_error(world: &World) {
    assert_eq!(
        world.failing_fields(),
        ["name", "email", "amount", "currency", "text", "terms"]
    );
}

#[then("the form is valid")]
fn the_form_is_valid(world: &World) {
    let profile = world.profile.get().expect("profile should be set");
    assert!(world.form().is_valid(profile));
}

#[then("the form is invalid")]
fn the_form_is_invalid(world: &World) {
    let profile = world.profile.get().expect("profile should be set");
    assert!(!world.form().is_valid(profile));
}

#[then("the submission is accepted")]
fn the_submission_is_accepted(world: &World) {
    let submitted = world.submission().expect("submission should be accepted");
    assert_eq!(submitted.form, world.form());
}

#[then("the submission is rejected")]
fn the_submission_is_rejected(world: &World) {
    match world.submission() {
        Err(SubmissionError::TransferRejected { errors }) => assert!(!errors.is_empty()),
        other => panic!("Expected TransferRejected, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Complete form passes the plain rules"
)]
fn complete_form_passes_the_plain_rules(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Small amount fails the schema rules"
)]
fn small_amount_fails_the_schema_rules(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Small amount passes the plain rules"
)]
fn small_amount_passes_the_plain_rules(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Unaccepted terms block the form"
)]
fn unaccepted_terms_block_the_form(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Every field invalid"
)]
fn every_field_invalid(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Valid form is submitted"
)]
fn valid_form_is_submitted(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/transfer_form.feature",
    name = "Invalid form is not submitted"
)]
fn invalid_form_is_not_submitted(world: World) {
    let _ = world;
}
