use practice_core::model::SetId;
use practice_core::{Phase, Rejection, Step, SubmitOutcome};
use services::{AppServices, SessionProgress};

fn finish(services: &AppServices, session: &mut practice_core::PracticeSession) {
    let session_loop = services.session_loop();
    loop {
        match session_loop.advance(session) {
            Step::Moved(_) => {}
            Step::Finished(_) | Step::AlreadyFinished => break,
        }
    }
}

#[test]
fn environmental_set_end_to_end() {
    let services = AppServices::embedded().expect("embedded catalog");
    let session_loop = services.session_loop();
    let mut session = session_loop.start_session(SetId::new(1)).expect("start");

    assert_eq!(SessionProgress::of(&session).label(), "Question 1 of 3");
    assert_eq!(session.phase(), Phase::NotStarted);

    let _ = session_loop.answer_current(&mut session, "1");
    let _ = session_loop.advance(&mut session);
    let _ = session_loop.answer_current(&mut session, "They taught her that nothing should go to waste.");
    let _ = session_loop.advance(&mut session);
    let _ = session_loop.answer_current(&mut session, "   ");

    let progress = SessionProgress::of(&session);
    assert_eq!(progress.position, 3);
    assert_eq!(progress.percent, 100);
    assert_eq!(progress.answered, 2);

    let Step::Finished(summary) = session_loop.advance(&mut session) else {
        panic!("expected the last advance to finish the session");
    };
    assert!((summary.multiple_choice_accuracy() - 100.0).abs() < f64::EPSILON);
    assert_eq!(summary.short_answer_attempted(), 1);
    assert_eq!(summary.paragraph_attempted(), 0);
    assert_eq!(summary.total_questions(), 3);
    assert!(SessionProgress::of(&session).is_complete);
}

#[test]
fn climate_set_short_answer_cap() {
    let services = AppServices::embedded().expect("embedded catalog");
    let session_loop = services.session_loop();
    let mut session = session_loop.start_session(SetId::new(2)).expect("start");
    let _ = session_loop.advance(&mut session);

    let within = vec!["word"; 75].join(" ");
    assert!(session_loop.answer_current(&mut session, &within).is_accepted());
    assert_eq!(session.remaining_words(), Some(0));

    let over = vec!["word"; 76].join(" ");
    assert_eq!(
        session_loop.answer_current(&mut session, &over),
        SubmitOutcome::Rejected(Rejection::WordLimit { words: 76, max: 75 })
    );
    assert_eq!(session.text_answer(1), within);
}

#[test]
fn try_again_keeps_the_same_set() {
    let services = AppServices::embedded().expect("embedded catalog");
    let session_loop = services.session_loop();
    let mut session = session_loop.start_session(SetId::new(3)).expect("start");
    let _ = session_loop.answer_current(&mut session, "0");
    finish(&services, &mut session);
    let first = session.summary().cloned().expect("summary after finish");
    assert!(first.multiple_choice_accuracy().abs() < f64::EPSILON);
    assert_eq!(first.matching_attempted(), 0);
    assert_eq!(first.matching_pairs_total(), 4);

    session_loop.restart(&mut session);
    assert_eq!(session.set_id(), Some(SetId::new(3)));
    assert!(session.summary().is_none());
    assert_eq!(session.current_index(), 0);
}
