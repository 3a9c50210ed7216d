use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use voxnote_core::{
    ComposerError, ComposerMode, DictationConfig, EngineError, NoteComposer, Notifier,
    SessionSlot, SpeechEngine, EMPTY_DRAFT_TOAST, NOTE_CREATED_TOAST,
};

#[derive(Clone, Default)]
struct MockEngine {
    available: bool,
    started: Rc<RefCell<u32>>,
    stopped: Rc<RefCell<u32>>,
}

impl MockEngine {
    fn available() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }
}

impl SpeechEngine for MockEngine {
    fn engine_id(&self) -> &str {
        "mock_engine"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, _config: &DictationConfig) -> Result<(), EngineError> {
        *self.started.borrow_mut() += 1;
        Ok(())
    }

    fn stop(&mut self) {
        *self.stopped.borrow_mut() += 1;
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    successes: Rc<RefCell<Vec<String>>>,
    warnings: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn toast_success(&mut self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn toast_warning(&mut self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn blocking_alert(&mut self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn isolated_slot() -> Arc<Mutex<SessionSlot>> {
    Arc::new(Mutex::new(SessionSlot::new()))
}

struct Harness {
    composer: NoteComposer<MockEngine, RecordingNotifier>,
    created: Rc<RefCell<Vec<String>>>,
    notifier: RecordingNotifier,
}

fn harness() -> Harness {
    let created = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&created);
    let notifier = RecordingNotifier::default();
    let composer = NoteComposer::with_session_slot(
        MockEngine::available(),
        notifier.clone(),
        move |content| sink.borrow_mut().push(content),
        isolated_slot(),
    );
    Harness {
        composer,
        created,
        notifier,
    }
}

#[test]
fn saving_nonempty_text_invokes_callback_once_and_resets() {
    let mut h = harness();
    h.composer.content_changed("meeting notes for monday");

    h.composer.save().expect("non-empty save should succeed");

    assert_eq!(
        h.created.borrow().as_slice(),
        ["meeting notes for monday".to_string()]
    );
    assert_eq!(h.composer.content(), "");
    assert_eq!(h.composer.mode(), ComposerMode::Onboarding);
    assert_eq!(
        h.notifier.successes.borrow().as_slice(),
        [NOTE_CREATED_TOAST.to_string()]
    );
}

#[test]
fn saving_empty_draft_warns_and_never_invokes_callback() {
    let mut h = harness();

    let err = h.composer.save().expect_err("empty save must fail");
    assert!(matches!(err, ComposerError::EmptyDraft));

    assert!(h.created.borrow().is_empty());
    assert_eq!(
        h.notifier.warnings.borrow().as_slice(),
        [EMPTY_DRAFT_TOAST.to_string()]
    );
    assert!(h.notifier.successes.borrow().is_empty());
}

#[test]
fn save_fires_once_per_save_across_multiple_notes() {
    let mut h = harness();

    h.composer.content_changed("first");
    h.composer.save().expect("first save");
    h.composer.content_changed("second");
    h.composer.save().expect("second save");

    assert_eq!(
        h.created.borrow().as_slice(),
        ["first".to_string(), "second".to_string()]
    );
}

#[test]
fn emptying_the_text_returns_to_onboarding() {
    let mut h = harness();

    h.composer.content_changed("about to vanish");
    assert_eq!(h.composer.mode(), ComposerMode::Editing);

    h.composer.content_changed("");
    assert_eq!(h.composer.mode(), ComposerMode::Onboarding);
    assert_eq!(h.composer.content(), "");
}

#[test]
fn begin_text_entry_leaves_onboarding() {
    let mut h = harness();
    h.composer.begin_text_entry();
    assert_eq!(h.composer.mode(), ComposerMode::Editing);
}

#[test]
fn failed_save_keeps_draft_usable() {
    let mut h = harness();

    h.composer.save().expect_err("empty save must fail");
    h.composer.content_changed("recovered");
    h.composer.save().expect("subsequent save should succeed");

    assert_eq!(h.created.borrow().as_slice(), ["recovered".to_string()]);
}
