use futures::channel::oneshot;
use futures::executor::LocalPool;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::provider::StaticProvider;
use crate::state::brief::BriefPhase;
use crate::util::deferral::test_helpers::spawn_manual;

#[test]
fn generating_caption_names_channel_and_volume() {
    let (headline, detail) = generating_caption(&StaticProvider.pending_brief());
    assert_eq!(headline, "Analyzing #design-team conversation...");
    assert_eq!(detail, "23 messages • Processing insights");
}

#[test]
fn edit_button_label_tracks_mode() {
    assert_eq!(edit_button_label(false), "Edit");
    assert_eq!(edit_button_label(true), "Done Editing");
}

// =============================================================
// Generation: page wiring driven by manual timers
// =============================================================

/// Brief signals live on the app owner; the page owner only holds the
/// deferral scope, so state stays readable after the page is torn down.
struct Generation {
    _app: Owner,
    page: Owner,
    pool: LocalPool,
    brief: RwSignal<BriefState>,
    generated: RwSignal<Option<GeneratedBrief>>,
    timer: Option<oneshot::Sender<()>>,
}

impl Generation {
    fn start() -> Self {
        let app = Owner::new();
        let (brief, generated, page) =
            app.with(|| (RwSignal::new(BriefState::default()), RwSignal::new(None::<GeneratedBrief>), Owner::new()));
        let scope = page.with(DeferralScope::bound_to_owner);
        let pool = LocalPool::new();
        let timer = spawn_manual(&pool, scope.token(), move || complete_generation(&StaticProvider, brief, generated));
        let mut generation = Self { _app: app, page, pool, brief, generated, timer: Some(timer) };
        generation.pool.run_until_stalled();
        generation
    }

    fn elapse(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.send(()).unwrap();
        }
        self.pool.run_until_stalled();
    }
}

#[test]
fn generation_populates_the_same_text_every_run() {
    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut generation = Generation::start();
        assert!(generation.brief.with_untracked(BriefState::is_generating));
        assert!(generation.generated.get_untracked().is_none());

        generation.elapse();
        let state = generation.brief.get_untracked();
        assert_eq!(state.phase, BriefPhase::Ready);
        assert_eq!(generation.generated.get_untracked(), Some(StaticProvider.generate_brief()));
        runs.push(state.content);
    }
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0], StaticProvider.generate_brief().content);
}

#[test]
fn teardown_before_generation_completes_leaves_state_untouched() {
    let mut generation = Generation::start();

    generation.page.cleanup();
    generation.elapse();

    assert_eq!(generation.brief.get_untracked(), BriefState::default());
    assert!(generation.generated.get_untracked().is_none());
}
