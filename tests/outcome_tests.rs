//! Unit tests for the `Outcome<T>` container and its combinators.
//!
//! Exercises every operation of the algebra: construction, predicates,
//! extraction, transformation, aggregation, side effects, and recovery,
//! including the fault-containment and short-circuit policies.

use outcome::error::{ErrorKind, Origin, OutcomeError, UNEXPECTED_ERROR};
use outcome::outcome::Outcome;
use rstest::rstest;

fn not_found() -> OutcomeError {
    OutcomeError::not_found("GONE", "nothing here")
}

fn assert_contained(error: &OutcomeError, panic_message: &str) {
    assert_eq!(error.kind(), ErrorKind::Unknown);
    assert_eq!(error.code(), UNEXPECTED_ERROR);
    let origin = error.origin().expect("contained faults carry an origin");
    assert_eq!(origin.cause().unwrap().description(), panic_message);
}

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn exactly_one_predicate_holds_per_variant() {
    let ok = Outcome::ok(5);
    let err: Outcome<i32> = Outcome::err(not_found());
    let none: Outcome<i32> = Outcome::none();

    assert_eq!(
        (ok.is_ok(), ok.is_err(), ok.is_none()),
        (true, false, false)
    );
    assert_eq!(
        (err.is_ok(), err.is_err(), err.is_none()),
        (false, true, false)
    );
    assert_eq!(
        (none.is_ok(), none.is_err(), none.is_none()),
        (false, false, true)
    );
}

#[rstest]
fn from_fn_wraps_a_produced_value() {
    assert_eq!(Outcome::from_fn(|| Some(11)), Outcome::ok(11));
}

#[rstest]
fn from_fn_maps_absence_to_none() {
    assert!(Outcome::<i32>::from_fn(|| None).is_none());
}

#[rstest]
fn from_fn_contains_a_panicking_producer() {
    let outcome = Outcome::from_fn(|| -> Option<i32> { panic!("producer exploded") });
    assert_contained(outcome.err_ref().unwrap(), "producer exploded");
}

#[rstest]
fn ok_ref_and_err_ref_borrow_their_variant() {
    assert_eq!(Outcome::ok(3).ok_ref(), Some(&3));
    assert_eq!(Outcome::ok(3).err_ref(), None);

    let err: Outcome<i32> = Outcome::err(not_found());
    assert_eq!(err.err_ref().unwrap().code(), "GONE");
    assert_eq!(err.ok_ref(), None);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn unwrap_or_uses_the_default_for_err_and_none() {
    assert_eq!(Outcome::ok(9).unwrap_or(0), 9);
    assert_eq!(Outcome::<i32>::err(not_found()).unwrap_or(0), 0);
    assert_eq!(Outcome::<i32>::none().unwrap_or(0), 0);
}

#[rstest]
fn unwrap_or_else_is_lazy_on_ok() {
    let value = Outcome::ok(9).unwrap_or_else(|| unreachable!("supplier must not run"));
    assert_eq!(value, 9);
    assert_eq!(Outcome::<i32>::none().unwrap_or_else(|| 4), 4);
}

#[rstest]
fn unwrap_returns_the_ok_value() {
    assert_eq!(Outcome::ok(5).unwrap(), 5);
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value")]
fn unwrap_panics_on_err() {
    Outcome::<i32>::err(not_found()).unwrap();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on a `None` value")]
fn unwrap_panics_on_none() {
    Outcome::<i32>::none().unwrap();
}

#[rstest]
fn fold_selects_exactly_one_branch() {
    let on_ok = Outcome::ok(2).fold(|v| v * 10, |_| -1, || 0);
    assert_eq!(on_ok, 20);

    let on_err = Outcome::<i32>::err(not_found()).fold(|v| v, |e| i32::from(e.is_not_found()), || 0);
    assert_eq!(on_err, 1);

    let on_none = Outcome::<i32>::none().fold(|v| v, |_| -1, || 7);
    assert_eq!(on_none, 7);
}

#[rstest]
fn into_option_and_into_result_round_out_the_edges() {
    assert_eq!(Outcome::ok(4).into_option(), Some(4));
    assert_eq!(Outcome::<i32>::err(not_found()).into_option(), None);
    assert_eq!(Outcome::<i32>::none().into_option(), None);

    assert_eq!(Outcome::ok(4).into_result(), Ok(Some(4)));
    assert_eq!(Outcome::<i32>::none().into_result(), Ok(None));
    assert_eq!(Outcome::<i32>::err(not_found()).into_result(), Err(not_found()));
}

// =============================================================================
// Transformation: replace
// =============================================================================

#[rstest]
fn replace_swaps_the_value_and_keeps_the_shape() {
    assert_eq!(Outcome::ok(1).replace(Some("next")), Outcome::ok("next"));
    assert_eq!(Outcome::<i32>::none().replace(Some("next")), Outcome::ok("next"));
}

#[rstest]
fn replace_with_absent_value_produces_none_even_from_ok() {
    assert!(Outcome::ok(1).replace(None::<&str>).is_none());
    assert!(Outcome::<i32>::none().replace(None::<&str>).is_none());
}

#[rstest]
fn replace_propagates_the_error() {
    let replaced: Outcome<&str> = Outcome::<i32>::err(not_found()).replace(Some("next"));
    assert_eq!(replaced, Outcome::err(not_found()));
}

// =============================================================================
// Transformation: map / flat_map
// =============================================================================

#[rstest]
fn map_transforms_only_the_ok_value() {
    assert_eq!(Outcome::ok(21).map(|x| x * 2), Outcome::ok(42));
    assert_eq!(Outcome::<i32>::err(not_found()).map(|x| x * 2), Outcome::err(not_found()));
    assert!(Outcome::<i32>::none().map(|x| x * 2).is_none());
}

#[rstest]
fn map_contains_a_panicking_mapper() {
    let outcome = Outcome::ok(1).map(|_| -> i32 { panic!("map exploded") });
    assert_contained(outcome.err_ref().unwrap(), "map exploded");
}

#[rstest]
fn flat_map_chains_and_flattens() {
    assert_eq!(Outcome::ok(8).flat_map(|n| Outcome::ok(n / 2)), Outcome::ok(4));
    assert!(Outcome::ok(8).flat_map(|_| Outcome::<i32>::none()).is_none());
    assert_eq!(
        Outcome::ok(8).flat_map(|_| Outcome::<i32>::err(not_found())),
        Outcome::err(not_found()),
    );
}

#[rstest]
fn flat_map_short_circuits_without_invoking_the_mapper() {
    let mut invoked = false;
    let from_err = Outcome::<i32>::err(not_found()).flat_map(|_| {
        invoked = true;
        Outcome::ok(1)
    });
    assert_eq!(from_err, Outcome::err(not_found()));
    assert!(!invoked);

    let from_none = Outcome::<i32>::none().flat_map(|_| {
        invoked = true;
        Outcome::ok(1)
    });
    assert!(from_none.is_none());
    assert!(!invoked);
}

#[rstest]
fn flat_map_contains_a_panicking_mapper() {
    let outcome = Outcome::ok(1).flat_map(|_| -> Outcome<i32> { panic!("mapper exploded") });
    assert_contained(outcome.err_ref().unwrap(), "mapper exploded");
}

// =============================================================================
// Transformation: map_err / or_else_err
// =============================================================================

#[rstest]
fn map_err_chains_a_different_error_onto_the_original() {
    let original = OutcomeError::unknown("LOW", "socket error").with_origin(Origin::new("reset"));
    let mapped = Outcome::<i32>::err(original)
        .map_err(|_| OutcomeError::not_found("USER", "no user"));

    let error = mapped.err_ref().unwrap();
    assert_eq!(error.code(), "USER");
    let descriptions: Vec<_> = error
        .origin()
        .unwrap()
        .chain()
        .map(Origin::description)
        .collect();
    assert_eq!(descriptions, ["caused by: LOW - socket error", "reset"]);
}

#[rstest]
fn map_err_returns_an_equal_error_verbatim() {
    let original = not_found();
    let mapped = Outcome::<i32>::err(original.clone()).map_err(|error| error.clone());
    let error = mapped.err_ref().unwrap();
    assert_eq!(*error, original);
    assert!(error.origin().is_none());
}

#[rstest]
fn map_err_leaves_ok_and_none_untouched() {
    let ok = Outcome::ok(1).map_err(|_| unreachable!("mapper must not run"));
    assert_eq!(ok, Outcome::ok(1));

    let none = Outcome::<i32>::none().map_err(|_| unreachable!("mapper must not run"));
    assert!(none.is_none());
}

#[rstest]
fn or_else_err_fills_only_the_none_case() {
    let filled: Outcome<i32> = Outcome::none().or_else_err(not_found());
    assert_eq!(filled, Outcome::err(not_found()));

    assert_eq!(Outcome::ok(1).or_else_err(not_found()), Outcome::ok(1));

    let existing = OutcomeError::unknown("FIRST", "kept");
    let unchanged = Outcome::<i32>::err(existing.clone()).or_else_err(not_found());
    assert_eq!(unchanged, Outcome::err(existing));
}

// =============================================================================
// Transformation: zip
// =============================================================================

#[rstest]
fn zip_pairs_two_ok_values() {
    assert_eq!(Outcome::ok(1).zip(Outcome::ok("a")), Outcome::ok((1, "a")));
}

#[rstest]
fn zip_prefers_this_sides_error() {
    let first = OutcomeError::unknown("FIRST", "left");
    let second = OutcomeError::unknown("SECOND", "right");
    let zipped: Outcome<(i32, i32)> =
        Outcome::err(first.clone()).zip(Outcome::err(second));
    assert_eq!(zipped, Outcome::err(first));
}

#[rstest]
fn zip_falls_back_to_the_other_sides_error() {
    let second = OutcomeError::unknown("SECOND", "right");
    let zipped = Outcome::ok(1).zip(Outcome::<i32>::err(second.clone()));
    assert_eq!(zipped, Outcome::err(second));
}

#[rstest]
fn zip_errors_beat_absence_on_either_side() {
    let error = not_found();
    let err_left: Outcome<(i32, i32)> =
        Outcome::err(error.clone()).zip(Outcome::none());
    assert_eq!(err_left, Outcome::err(error.clone()));

    let err_right: Outcome<(i32, i32)> =
        Outcome::none().zip(Outcome::err(error.clone()));
    assert_eq!(err_right, Outcome::err(error));
}

#[rstest]
fn zip_with_absence_and_no_error_is_none() {
    assert!(Outcome::<i32>::none().zip(Outcome::ok(1)).is_none());
    assert!(Outcome::ok(1).zip(Outcome::<i32>::none()).is_none());
    assert!(Outcome::<i32>::none().zip(Outcome::<i32>::none()).is_none());
}

// =============================================================================
// Transformation: filter
// =============================================================================

#[rstest]
fn filter_keeps_values_that_satisfy_the_predicate() {
    let error = OutcomeError::validation_failed("NEG", "negative");
    assert_eq!(Outcome::ok(3).filter(|n| *n > 0, error.clone()), Outcome::ok(3));
    assert_eq!(Outcome::ok(-3).filter(|n| *n > 0, error.clone()), Outcome::err(error));
}

#[rstest]
fn filter_contains_a_panicking_predicate() {
    let outcome = Outcome::ok(3).filter(|_| panic!("predicate exploded"), not_found());
    assert_contained(outcome.err_ref().unwrap(), "predicate exploded");
}

#[rstest]
fn filter_passes_err_and_none_through() {
    let existing = OutcomeError::unknown("KEPT", "kept");
    let err = Outcome::<i32>::err(existing.clone()).filter(|_| false, not_found());
    assert_eq!(err, Outcome::err(existing));

    assert!(Outcome::<i32>::none().filter(|_| false, not_found()).is_none());
}

// =============================================================================
// Aggregation: sequence / traverse / flatten
// =============================================================================

#[rstest]
fn sequence_of_all_ok_preserves_order() {
    let sequenced = Outcome::sequence(vec![Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)]);
    assert_eq!(sequenced, Outcome::ok(vec![1, 2, 3]));
}

#[rstest]
fn sequence_of_nothing_is_an_empty_ok() {
    let sequenced = Outcome::<i32>::sequence(Vec::new());
    assert_eq!(sequenced, Outcome::ok(Vec::new()));
}

#[rstest]
fn sequence_short_circuits_on_the_first_err() {
    let sequenced = Outcome::sequence(vec![
        Outcome::ok(1),
        Outcome::err(not_found()),
        Outcome::none(),
    ]);
    assert_eq!(sequenced, Outcome::err(not_found()));
}

#[rstest]
fn sequence_short_circuits_on_a_none_seen_before_any_err() {
    let sequenced = Outcome::sequence(vec![
        Outcome::ok(1),
        Outcome::none(),
        Outcome::err(not_found()),
    ]);
    assert!(sequenced.is_none());
}

#[rstest]
fn traverse_maps_then_sequences() {
    let traversed = Outcome::traverse(vec!["1", "2", "3"], |raw| {
        Outcome::from_fn(|| raw.parse::<i32>().ok())
    });
    assert_eq!(traversed, Outcome::ok(vec![1, 2, 3]));
}

#[rstest]
fn traverse_maps_every_element_before_sequencing() {
    let mut calls = 0;
    let traversed = Outcome::traverse(vec![1, 2, 3], |n| {
        calls += 1;
        if n == 2 {
            Outcome::err(not_found())
        } else {
            Outcome::ok(n)
        }
    });
    assert_eq!(traversed, Outcome::err(not_found()));
    assert_eq!(calls, 3);
}

#[rstest]
fn flatten_collapses_one_level() {
    assert_eq!(Outcome::ok(Outcome::ok(5)).flatten(), Outcome::ok(5));
    assert_eq!(
        Outcome::ok(Outcome::<i32>::err(not_found())).flatten(),
        Outcome::err(not_found()),
    );
    assert!(Outcome::ok(Outcome::<i32>::none()).flatten().is_none());
    assert_eq!(
        Outcome::<Outcome<i32>>::err(not_found()).flatten(),
        Outcome::err(not_found()),
    );
    assert!(Outcome::<Outcome<i32>>::none().flatten().is_none());
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn if_hooks_fire_only_on_their_variant() {
    let mut log = Vec::new();

    Outcome::ok(1).if_ok(|v| log.push(format!("ok {v}")));
    Outcome::ok(1).if_err(|_| log.push("err".to_string()));
    Outcome::ok(1).if_none(|| log.push("none".to_string()));

    let err: Outcome<i32> = Outcome::err(not_found());
    err.if_err(|e| log.push(format!("err {}", e.code())));

    let none: Outcome<i32> = Outcome::none();
    none.if_none(|| log.push("none".to_string()));

    assert_eq!(log, ["ok 1", "err GONE", "none"]);
}

#[rstest]
fn tap_observes_the_value_and_returns_self() {
    let mut seen = None;
    let outcome = Outcome::ok(10).tap(|value| seen = Some(*value));
    assert_eq!(outcome, Outcome::ok(10));
    assert_eq!(seen, Some(10));
}

#[rstest]
fn tap_contains_a_panicking_action() {
    let outcome = Outcome::ok(10).tap(|_| panic!("tap exploded"));
    assert_contained(outcome.err_ref().unwrap(), "tap exploded");
}

#[rstest]
fn tap_skips_err_and_none() {
    let err = Outcome::<i32>::err(not_found()).tap(|_| unreachable!("action must not run"));
    assert_eq!(err, Outcome::err(not_found()));

    let none = Outcome::<i32>::none().tap(|_| unreachable!("action must not run"));
    assert!(none.is_none());
}

#[rstest]
fn tap_with_propagates_only_the_side_failure() {
    let validated = Outcome::ok(5).tap_with(|_| Outcome::ok("ignored payload"));
    assert_eq!(validated, Outcome::ok(5));

    let emptied_side = Outcome::ok(5).tap_with(|_| Outcome::<&str>::none());
    assert_eq!(emptied_side, Outcome::ok(5));

    let failed = Outcome::ok(5).tap_with(|_| Outcome::<&str>::err(not_found()));
    assert_eq!(failed, Outcome::err(not_found()));
}

#[rstest]
fn tap_with_contains_a_panicking_mapper() {
    let outcome = Outcome::ok(5).tap_with(|_| -> Outcome<i32> { panic!("side check exploded") });
    assert_contained(outcome.err_ref().unwrap(), "side check exploded");
}

#[rstest]
fn tap_with_passes_err_and_none_through() {
    let existing = OutcomeError::unknown("KEPT", "kept");
    let err = Outcome::<i32>::err(existing.clone())
        .tap_with(|_| -> Outcome<i32> { unreachable!("mapper must not run") });
    assert_eq!(err, Outcome::err(existing));

    let none = Outcome::<i32>::none()
        .tap_with(|_| -> Outcome<i32> { unreachable!("mapper must not run") });
    assert!(none.is_none());
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_replaces_an_err_with_a_value() {
    let recovered = Outcome::<i32>::err(not_found()).recover(|_| Some(0));
    assert_eq!(recovered, Outcome::ok(0));
}

#[rstest]
fn recover_can_empty_into_none() {
    let emptied = Outcome::<i32>::err(not_found()).recover(|_| None);
    assert!(emptied.is_none());
}

#[rstest]
fn recover_is_a_no_op_on_ok_and_none() {
    let ok = Outcome::ok(5).recover(|_| unreachable!("recovery must not run"));
    assert_eq!(ok, Outcome::ok(5));

    let none = Outcome::<i32>::none().recover(|_| unreachable!("recovery must not run"));
    assert!(none.is_none());
}

#[rstest]
fn recover_panic_keeps_the_original_error_and_enriches_its_origin() {
    let original = not_found().with_origin(Origin::new("db miss"));
    let outcome = Outcome::<i32>::err(original).recover(|_| panic!("recovery exploded"));

    let error = outcome.err_ref().unwrap();
    assert!(error.is_not_found());
    assert_eq!(error.code(), "GONE");

    let origin = error.origin().unwrap();
    assert!(origin.description().contains("recovery exploded"));
    assert_eq!(origin.cause().unwrap().description(), "db miss");
}

#[rstest]
fn recover_with_can_refail_into_a_different_error() {
    let refailed = Outcome::<i32>::err(not_found())
        .recover_with(|_| Outcome::err(OutcomeError::invalid_request("STALE", "stale")));
    assert_eq!(refailed.err_ref().unwrap().code(), "STALE");
}

#[rstest]
fn recover_with_can_recover_or_empty() {
    let recovered = Outcome::<i32>::err(not_found()).recover_with(|_| Outcome::ok(1));
    assert_eq!(recovered, Outcome::ok(1));

    let emptied = Outcome::<i32>::err(not_found()).recover_with(|_| Outcome::none());
    assert!(emptied.is_none());
}

#[rstest]
fn recover_with_panic_follows_the_recover_policy() {
    let original = not_found().with_origin(Origin::new("db miss"));
    let outcome = Outcome::<i32>::err(original)
        .recover_with(|_| -> Outcome<i32> { panic!("mapper exploded") });

    let error = outcome.err_ref().unwrap();
    assert!(error.is_not_found());
    let origin = error.origin().unwrap();
    assert!(origin.description().contains("mapper exploded"));
    assert_eq!(origin.cause().unwrap().description(), "db miss");
}

#[rstest]
fn recover_with_is_a_no_op_on_ok_and_none() {
    let ok = Outcome::ok(5).recover_with(|_| unreachable!("mapper must not run"));
    assert_eq!(ok, Outcome::ok(5));

    let none = Outcome::<i32>::none().recover_with(|_| unreachable!("mapper must not run"));
    assert!(none.is_none());
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

#[rstest]
fn option_and_result_convert_into_outcomes() {
    assert_eq!(Outcome::from(Some(3)), Outcome::ok(3));
    assert!(Outcome::<i32>::from(None).is_none());

    let ok: Result<i32, OutcomeError> = Ok(3);
    assert_eq!(Outcome::from(ok), Outcome::ok(3));

    let err: Result<i32, OutcomeError> = Err(not_found());
    assert_eq!(Outcome::from(err), Outcome::err(not_found()));
}

#[rstest]
fn into_iter_yields_the_ok_value_or_nothing() {
    let values: Vec<i32> = Outcome::ok(3).into_iter().collect();
    assert_eq!(values, vec![3]);

    let from_err: Vec<i32> = Outcome::<i32>::err(not_found()).into_iter().collect();
    assert!(from_err.is_empty());

    let from_none: Vec<i32> = Outcome::<i32>::none().into_iter().collect();
    assert!(from_none.is_empty());
}

#[rstest]
fn into_iter_len_is_exact() {
    assert_eq!(Outcome::ok(3).into_iter().len(), 1);
    assert_eq!(Outcome::<i32>::none().into_iter().len(), 0);

    let mut iterator = Outcome::ok(3).into_iter();
    assert_eq!(iterator.next(), Some(3));
    assert_eq!(iterator.len(), 0);
    assert_eq!(iterator.next(), None);
}
