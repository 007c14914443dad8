use citizen_core::{
    ClaimEligibility, RegistrationError, SampleData, add_comment_in, claim_eligibility,
    quick_feedback, toggle_like_in,
};

#[test]
fn liking_and_unliking_a_community_report_is_symmetric() {
    let data = SampleData::load_from_static();
    let mut feed = data.community.clone();
    let id = feed[0].report.id;
    let before = feed[0].likes;

    assert_eq!(toggle_like_in(&mut feed, id), Some(true));
    assert_eq!(feed[0].likes, before + 1);
    assert_eq!(toggle_like_in(&mut feed, id), Some(false));
    assert_eq!(feed[0].likes, before);
}

#[test]
fn commenting_preserves_existing_thread() {
    let data = SampleData::load_from_static();
    let mut feed = data.community.clone();
    let id = feed[0].report.id;
    let existing = feed[0].comment_count();

    assert!(add_comment_in(&mut feed, id, "Priya Sharma", "Following this."));
    assert_eq!(feed[0].comment_count(), existing + 1);
    assert_eq!(feed[0].comments[0].text, "Following this.");
    assert_eq!(feed[0].comments.last().unwrap().id, existing as u32);
}

#[test]
fn sample_rewards_cover_every_eligibility_state() {
    let data = SampleData::load_from_static();
    let points = data.profile.points;
    let states: Vec<ClaimEligibility> = data
        .rewards
        .iter()
        .map(|reward| claim_eligibility(points, reward))
        .collect();

    assert!(states.contains(&ClaimEligibility::Claimable));
    assert!(states.contains(&ClaimEligibility::OutOfStock));
    assert!(
        states
            .iter()
            .any(|state| matches!(state, ClaimEligibility::NeedMorePoints(_)))
    );
}

#[test]
fn full_and_completed_events_reject_registration() {
    let data = SampleData::load_from_static();
    let mut events = data.events.clone();

    let open = events
        .iter_mut()
        .find(|event| !event.registered && !event.is_full())
        .expect("sample data has an open event");
    open.register().unwrap();

    let completed = events
        .iter_mut()
        .find(|event| event.status == citizen_core::EventStatus::Completed)
        .expect("sample data has a completed event");
    assert!(matches!(
        completed.register(),
        Err(RegistrationError::Completed | RegistrationError::AlreadyRegistered)
    ));
}

#[test]
fn quick_feedback_marks_an_awaiting_issue_rated() {
    let data = SampleData::load_from_static();
    let mut issues = data.resolved_issues.clone();
    let (given_before, pending_before) = citizen_core::feedback_counts(&issues);

    let awaiting = issues
        .iter_mut()
        .find(|issue| issue.feedback.is_none())
        .expect("sample data has an unrated issue");
    awaiting.feedback = Some(quick_feedback(true));

    let (given, pending) = citizen_core::feedback_counts(&issues);
    assert_eq!(given, given_before + 1);
    assert_eq!(pending, pending_before - 1);
}
