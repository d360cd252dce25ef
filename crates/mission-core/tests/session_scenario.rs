//! End-to-end mission flow through the public API

use std::cell::RefCell;

use mission_core::{
    reconcile, Celebration, Codebook, Denial, Group, Intensity, KeyValueStore, MemoryStore,
    MissionResult, MissionSession, Notifier, PasscodeFlow, SessionConfig, Verdict,
    DEFAULT_STORAGE_KEY,
};

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<Celebration>>,
}

impl Notifier for RecordingNotifier {
    fn celebrate(&self, celebration: &Celebration) -> MissionResult<()> {
        self.seen.borrow_mut().push(celebration.clone());
        Ok(())
    }
}

fn defaults() -> Vec<Group> {
    vec![
        Group::new("A", "Team A", "#ef4444")
            .with_members(["aren", "geralt", "lucy", "amy"])
            .with_mission(1, "group selfie")
            .with_mission(2, "find the best bread")
            .with_mission(3, "win the quiz"),
        Group::new("B", "Team B", "#3b82f6")
            .with_members(["jay", "jayce", "jinx", "vayne"])
            .with_mission(1, "ten second vlog")
            .with_mission(2, "cheap souvenir")
            .with_mission(3, "ship a bug fix"),
    ]
}

fn codebook() -> Codebook {
    Codebook::new(4).with_code("A", "9771").with_code("B", "0821")
}

fn enter(flow: &mut PasscodeFlow, book: &Codebook, code: &str) -> Option<Verdict> {
    code.chars()
        .enumerate()
        .filter_map(|(i, c)| flow.enter_digit(book, i, &c.to_string()))
        .last()
}

#[test]
fn secret_mission_unlocks_the_group() {
    let defaults = defaults();
    assert_eq!(reconcile(&defaults, None), defaults);

    let store = MemoryStore::new();
    let notifier = RecordingNotifier::default();
    let book = codebook();
    let mut session = MissionSession::open(SessionConfig::default(), &defaults, &store, &notifier);
    assert_eq!(session.groups(), defaults.as_slice());

    assert_eq!(session.toggle("A", 2), Err(Denial::Locked));
    assert_eq!(session.groups(), defaults.as_slice());

    let mut flow = PasscodeFlow::for_codebook(&book);
    flow.open("A");
    let verdict = enter(&mut flow, &book, "9771").expect("full entry yields a verdict");
    assert_eq!(verdict, Verdict::Granted { group_id: "A".into() });
    assert!(session.apply_verdict(&verdict));
    assert!(!flow.is_open());

    assert_eq!(session.toggle("A", 2), Ok(()));
    let group = session.group("A").unwrap();
    assert!(group.mission(1).unwrap().completed);
    assert!(group.mission(2).unwrap().completed);
    assert!(!group.mission(3).unwrap().completed);

    // group B stays locked
    assert_eq!(session.toggle("B", 2), Err(Denial::Locked));

    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|c| c.intensity() == Intensity::Burst));
    assert_eq!(seen[0].accent_color, "#ef4444");
}

#[test]
fn wrong_code_keeps_mission_open() {
    let defaults = defaults();
    let book = codebook();
    let mut session = MissionSession::open(SessionConfig::default(), &defaults, MemoryStore::new(), RecordingNotifier::default());

    let mut flow = PasscodeFlow::for_codebook(&book);
    flow.open("A");
    let verdict = enter(&mut flow, &book, "0821").unwrap();
    assert_eq!(verdict, Verdict::Rejected { group_id: "A".into() });
    assert!(!session.apply_verdict(&verdict));

    let entry = flow.entry().expect("prompt stays open after a reject");
    assert!(entry.rejected);
    assert!(entry.digits.iter().all(Option::is_none));
    assert!(!session.is_interactable("A", 2));
}

#[test]
fn finishing_the_group_fires_the_finale() {
    let defaults = defaults();
    let notifier = RecordingNotifier::default();
    let mut session = MissionSession::open(SessionConfig::default(), &defaults, MemoryStore::new(), &notifier);

    session.complete_first_mission("B");
    session.toggle("B", 2).unwrap();
    session.toggle("B", 3).unwrap();

    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[2].intensity(), Intensity::Finale);
    assert_eq!(seen[2].accent_color, "#3b82f6");
}

#[test]
fn progress_survives_a_reload_with_new_missions() {
    let store = MemoryStore::new();
    {
        let mut session = MissionSession::open(SessionConfig::default(), &defaults(), &store, RecordingNotifier::default());
        session.complete_first_mission("A");
        session.toggle("A", 3).unwrap();
    }

    let mut next = defaults();
    next[0].missions.push(mission_core::Mission::new(4, "new mission"));
    next[1].missions.retain(|m| m.id != 3);

    let session = MissionSession::open(SessionConfig::default(), &next, &store, RecordingNotifier::default());
    let a = session.group("A").unwrap();
    assert!(a.mission(1).unwrap().completed);
    assert!(a.mission(3).unwrap().completed);
    assert!(!a.mission(4).unwrap().completed);
    assert_eq!(session.group("B").unwrap().missions.len(), 2);

    let saved = store.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(mission_core::decode_groups(&saved).as_deref(), Some(session.groups()));
}
