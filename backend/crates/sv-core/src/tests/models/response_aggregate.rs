use crate::{ResponseAggregate, completion_rate};

use googletest::prelude::*;
use proptest::prelude::*;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn given_no_invitations_when_computing_rate_then_zero() {
    assert_that!(completion_rate(0, 0), eq(0.0));
    assert_that!(ResponseAggregate::default().completion_rate(), eq(0.0));
}

#[test]
fn given_45_of_120_when_computing_rate_then_37_5() {
    let aggregate = ResponseAggregate::new(45, 120).unwrap();

    assert_that!(aggregate.completion_rate(), eq(37.5));
}

#[test]
fn given_more_responses_than_invitations_when_constructed_then_error() {
    assert_that!(ResponseAggregate::new(5, 4), err(anything()));
}

#[test]
fn given_negative_counts_when_constructed_then_error() {
    assert_that!(ResponseAggregate::new(-1, 4), err(anything()));
    assert_that!(ResponseAggregate::new(0, -4), err(anything()));
}

#[test]
fn given_everyone_responded_when_recording_response_then_error() {
    let aggregate = ResponseAggregate::new(3, 3).unwrap();

    assert_that!(aggregate.with_response(), err(anything()));
}

#[test]
fn given_invitations_when_recording_response_then_count_increases() {
    let aggregate = ResponseAggregate::default()
        .with_invitations(2)
        .unwrap()
        .with_response()
        .unwrap();

    assert_that!(aggregate.responses(), eq(1));
    assert_that!(aggregate.total_invited(), eq(2));
    assert_that!(aggregate.completion_rate(), eq(50.0));
}

#[test]
fn given_non_positive_invitation_count_when_inviting_then_error() {
    assert_that!(
        ResponseAggregate::default().with_invitations(0),
        err(anything())
    );
    assert_that!(
        ResponseAggregate::default().with_invitations(-3),
        err(anything())
    );
}

#[test]
fn given_overflowing_invitations_when_inviting_then_error() {
    let aggregate = ResponseAggregate::new(0, i64::MAX).unwrap();

    assert_that!(aggregate.with_invitations(1), err(anything()));
}

// =========================================================================
// Property-Based Tests
// =========================================================================

#[derive(Debug, Clone)]
enum Update {
    Invite(i64),
    Respond,
}

fn update_strategy() -> impl Strategy<Value = Update> {
    prop_oneof![(1i64..50).prop_map(Update::Invite), Just(Update::Respond)]
}

proptest! {
    #[test]
    fn given_any_update_sequence_then_responses_never_exceed_invited(
        updates in prop::collection::vec(update_strategy(), 0..60)
    ) {
        let mut aggregate = ResponseAggregate::default();
        for update in updates {
            let next = match update {
                Update::Invite(count) => aggregate.with_invitations(count),
                Update::Respond => aggregate.with_response(),
            };
            if let Ok(next) = next {
                aggregate = next;
            }
            prop_assert!(aggregate.responses() <= aggregate.total_invited());
            prop_assert!(aggregate.responses() >= 0);
        }
    }

    #[test]
    fn given_valid_counts_then_rate_is_between_0_and_100(
        (responses, total) in (0i64..10_000).prop_flat_map(|total| (0..=total, Just(total)))
    ) {
        let rate = completion_rate(responses, total);
        prop_assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn given_zero_invited_then_rate_is_zero(responses in 0i64..1_000) {
        prop_assert_eq!(completion_rate(responses, 0), 0.0);
    }
}
