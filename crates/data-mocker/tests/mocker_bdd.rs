//! Behavioural tests for the data-mocker facade.
//!
//! These scenarios cover seeded reproducibility, regional tables, country
//! validation and the custom-provider rules of the registry.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use chrono::{Months, NaiveDate};
use data_mocker::{
    DataMocker, GenerationError, MockerConfig, ProviderOverrides, Region, RegistryError,
    belongs_to_region,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::{fixture_clock, seeded_mocker};

const GREETING: &str = "hello there";

#[derive(Default, ScenarioState)]
struct World {
    mocker: Slot<DataMocker>,
    names: Slot<Vec<String>>,
    second_names: Slot<Vec<String>>,
    phone: Slot<String>,
    request: Slot<Result<String, GenerationError>>,
    date: Slot<NaiveDate>,
    build: Slot<Result<DataMocker, RegistryError>>,
}

impl World {
    fn mocker(&self) -> DataMocker {
        self.mocker.get().expect("mocker should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn five_names(mocker: &DataMocker) -> Vec<String> {
    (0..5)
        .map(|_| mocker.name().full_name().expect("populated tables"))
        .collect()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a mocker seeded with {seed:u64}")]
fn a_mocker_seeded_with(world: &World, seed: u64) {
    world
        .mocker
        .set(seeded_mocker(MockerConfig::default().with_seed(seed)));
}

#[given("a mocker seeded with {seed:u64} for the {region} region")]
fn a_mocker_seeded_for_region(world: &World, seed: u64, region: String) {
    let parsed: Region = region.parse().expect("known region");
    let config = MockerConfig::default()
        .with_seed(seed)
        .with_name_region(parsed);
    world.mocker.set(seeded_mocker(config));
}

// ============================================================================
// When steps
// ============================================================================

#[when("five names are generated")]
fn five_names_are_generated(world: &World) {
    world.names.set(five_names(&world.mocker()));
}

#[when("five names are generated twice")]
fn five_names_are_generated_twice(world: &World) {
    let seed = world.mocker().config().seed().expect("seeded mocker");
    let twin = seeded_mocker(MockerConfig::default().with_seed(seed));
    world.names.set(five_names(&world.mocker()));
    world.second_names.set(five_names(&twin));
}

#[when("a phone number is generated for {code}")]
fn a_phone_number_is_generated_for(world: &World, code: String) {
    let number = world
        .mocker()
        .phone_number()
        .for_country(&code)
        .expect("supported country");
    world.phone.set(number);
}

#[when("an address is requested for {code}")]
fn an_address_is_requested_for(world: &World, code: String) {
    world.request.set(world.mocker().address().for_country(&code));
}

#[when("a date within the past {years:i32} years is generated")]
fn a_past_date_is_generated(world: &World, years: i32) {
    let date = world.mocker().date().past(years).expect("non-negative years");
    world.date.set(date);
}

#[when("a custom provider is registered under {key}")]
fn a_custom_provider_is_registered(world: &World, key: String) {
    let overrides = ProviderOverrides::default().with_custom(key, GREETING);
    world.build.set(DataMocker::with_clock(
        MockerConfig::default(),
        fixture_clock(),
        overrides,
    ));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both batches are identical")]
fn both_batches_are_identical(world: &World) {
    let first = world.names.get().expect("first batch should be set");
    let second = world.second_names.get().expect("second batch should be set");
    assert_eq!(first, second, "seeded mockers should agree");
}

#[then("every name belongs to the {region} region")]
fn every_name_belongs_to_the_region(world: &World, region: String) {
    let parsed: Region = region.parse().expect("known region");
    for name in world.names.get().expect("names should be set") {
        assert!(belongs_to_region(&name, parsed), "{name} is not {parsed}");
    }
}

#[then("the phone number is valid for {code}")]
fn the_phone_number_is_valid_for(world: &World, code: String) {
    let number = world.phone.get().expect("phone should be set");
    let valid = world
        .mocker()
        .phone_number()
        .is_valid_for_country(&number, &code)
        .expect("supported country");
    assert!(valid, "{number} should be valid for {code}");
}

#[then("the request fails with an invalid argument error")]
fn the_request_fails_with_invalid_argument(world: &World) {
    match world.request.get().expect("request should be made") {
        Err(GenerationError::InvalidArgument { message }) => {
            assert!(message.contains("supported"), "{message}");
        }
        other => panic!("Expected InvalidArgument, got: {other:?}"),
    }
}

#[then("the date falls before today and within {years:u32} years")]
fn the_date_falls_within(world: &World, years: u32) {
    let date = world.date.get().expect("date should be set");
    let today = world.mocker().date().today();
    let earliest = today
        .checked_sub_months(Months::new(years * 12))
        .expect("in calendar");
    assert!(date < today, "{date} should be before {today}");
    assert!(date >= earliest, "{date} should be on or after {earliest}");
}

#[then("building the mocker fails with a reserved key error")]
fn building_fails_with_reserved_key(world: &World) {
    match world.build.get().expect("build should be attempted") {
        Err(RegistryError::ReservedKey { .. }) => {}
        other => panic!("Expected ReservedKey, got: {other:?}"),
    }
}

#[then("the greeting provider resolves to its value")]
fn the_greeting_provider_resolves(world: &World) {
    let mocker = world
        .build
        .get()
        .expect("build should be attempted")
        .expect("free key");
    assert_eq!(mocker.custom::<&str>("greeting"), Ok(&GREETING));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Seeded mockers repeat their output"
)]
fn seeded_mockers_repeat_their_output(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Regional names come from the regional tables"
)]
fn regional_names_come_from_the_regional_tables(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Phone numbers validate for their country"
)]
fn phone_numbers_validate_for_their_country(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Unsupported address countries fail loudly"
)]
fn unsupported_address_countries_fail_loudly(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Past dates stay behind the fixed clock"
)]
fn past_dates_stay_behind_the_fixed_clock(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Custom providers cannot shadow built-in keys"
)]
fn custom_providers_cannot_shadow_built_in_keys(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/data_mocker.feature",
    name = "Custom providers resolve through the facade"
)]
fn custom_providers_resolve_through_the_facade(world: World) {
    let _ = world;
}
