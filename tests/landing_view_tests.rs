
use std::{sync::Arc, time::Duration};

use fake_repo::*;
use service_directory::{
    entities::{
        search::ProviderFilter,
        view::{PresentationVariant, BACKGROUND_IMAGES, NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE},
    },
    errors::AppError,
    use_cases::{
        landing_view::{LandingView, ViewOptions},
        sessions::SessionStore,
    },
};
use tokio::time::sleep;

const PAST_DEBOUNCE: Duration = Duration::from_millis(350);

fn view(repo: &Arc<FakeRepo>) -> LandingView<FakeRepo> {
    LandingView::new(repo.clone(), ViewOptions::default())
}

fn compact_view(repo: &Arc<FakeRepo>) -> LandingView<FakeRepo> {
    LandingView::new(
        repo.clone(),
        ViewOptions {
            variant: PresentationVariant::Compact,
            ..ViewOptions::default()
        },
    )
}

#[tokio::test(start_paused = true)]
async fn suggestions_follow_the_search_text() {
    let repo = Arc::new(FakeRepo::with_professions(&["Plumbing", "Electrical Services", "Plumbing"]));
    let view = view(&repo);
    view.initialize().await;

    view.set_search_term("elect");
    let snapshot = view.snapshot();

    assert_eq!(snapshot.professions, vec!["Electrical Services", "Plumbing"]);
    assert!(snapshot.show_suggestions);
    assert_eq!(snapshot.suggestions, vec!["Electrical Services"]);

    view.set_search_term("");
    let snapshot = view.snapshot();
    assert!(!snapshot.show_suggestions);
    assert!(snapshot.suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_profession_fetch_leaves_categories_empty() {
    let repo = Arc::new(FakeRepo::failing_professions());
    let view = view(&repo);
    view.initialize().await;

    view.set_search_term("plumb");
    let snapshot = view.snapshot();

    assert!(snapshot.professions.is_empty());
    assert!(snapshot.suggestions.is_empty());
    assert!(snapshot.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn accepting_a_suggestion_sets_the_text_and_hides_the_list() {
    let repo = Arc::new(FakeRepo::with_professions(&["Electrical Services", "Plumbing"]));
    let view = view(&repo);
    view.initialize().await;

    view.set_search_term("elec");
    view.accept_suggestion("Electrical Services");
    sleep(PAST_DEBOUNCE).await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.search_term, "Electrical Services");
    assert!(!snapshot.show_suggestions);
    assert_eq!(repo.calls(), vec![ProviderFilter::new("Electrical Services", None)]);
}

#[tokio::test(start_paused = true)]
async fn accepting_the_current_text_as_a_suggestion_does_not_search_again() {
    let repo = Arc::new(FakeRepo::with_professions(&["Plumbing"]));
    let view = view(&repo);
    view.initialize().await;

    view.set_search_term("Plumbing");
    sleep(PAST_DEBOUNCE).await;
    assert!(view.snapshot().show_suggestions);

    view.accept_suggestion("Plumbing");
    sleep(PAST_DEBOUNCE).await;

    assert_eq!(view.search_term(), "Plumbing");
    assert!(!view.snapshot().show_suggestions);
    assert_eq!(repo.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn resending_the_same_text_does_not_search_again() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.set_search_term("tiles");
    sleep(PAST_DEBOUNCE).await;
    view.set_search_term("tiles");
    sleep(PAST_DEBOUNCE).await;

    assert_eq!(repo.calls(), vec![ProviderFilter::new("tiles", None)]);
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_issues_one_search_for_the_final_text() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.set_search_term("p");
    sleep(Duration::from_millis(100)).await;
    view.set_search_term("pl");
    sleep(Duration::from_millis(100)).await;
    view.set_search_term("plu");
    sleep(Duration::from_millis(299)).await;

    assert!(repo.calls().is_empty());

    sleep(Duration::from_millis(10)).await;
    assert_eq!(repo.calls(), vec![ProviderFilter::new("plu", None)]);
}

#[tokio::test(start_paused = true)]
async fn empty_filters_never_reach_the_backend() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.set_search_term("");
    sleep(PAST_DEBOUNCE).await;

    let snapshot = view.snapshot();
    assert!(repo.calls().is_empty());
    assert!(snapshot.providers.is_empty());
    assert!(!snapshot.loading);
    assert!(snapshot.empty_message.is_none());
}

#[tokio::test(start_paused = true)]
async fn selected_profession_restricts_results() {
    let repo = Arc::new(FakeRepo::new());
    let plumber = provider("Ravi Kumar", "Plumbing");
    repo.respond("Plumbing", Duration::from_millis(20), vec![plumber.clone()]);
    let view = view(&repo);

    assert_eq!(view.toggle_profession("Plumbing").as_deref(), Some("Plumbing"));
    sleep(PAST_DEBOUNCE).await;

    assert_eq!(view.providers(), vec![plumber]);
    assert_eq!(
        repo.calls(),
        vec![ProviderFilter { term: None, profession: Some("Plumbing".into()) }]
    );
}

#[tokio::test(start_paused = true)]
async fn text_and_profession_combine_in_one_query() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.toggle_profession("Carpentry");
    view.set_search_term("cabinet");
    sleep(PAST_DEBOUNCE).await;

    assert_eq!(
        repo.calls(),
        vec![ProviderFilter::new("cabinet", Some("Carpentry".into()))]
    );
}

#[tokio::test(start_paused = true)]
async fn toggling_the_same_profession_twice_clears_it() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.toggle_profession("Plumbing");
    assert_eq!(view.toggle_profession("Plumbing"), None);
    sleep(PAST_DEBOUNCE).await;

    assert_eq!(view.selected_profession(), None);
    assert!(repo.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn selecting_another_profession_replaces_the_first() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.toggle_profession("Plumbing");
    assert_eq!(view.toggle_profession("Carpentry").as_deref(), Some("Carpentry"));
}

#[tokio::test(start_paused = true)]
async fn stale_response_does_not_overwrite_newer_results() {
    let repo = Arc::new(FakeRepo::new());
    let slow = provider("Slow Sunil", "Plumbing");
    let fast = provider("Fast Farah", "Carpentry");
    repo.respond("slow", Duration::from_millis(1000), vec![slow]);
    repo.respond("fast", Duration::from_millis(10), vec![fast.clone()]);
    let view = view(&repo);

    view.set_search_term("slow");
    sleep(PAST_DEBOUNCE).await;
    assert!(view.snapshot().loading);

    view.set_search_term("fast");
    sleep(Duration::from_millis(400)).await;
    assert_eq!(view.providers(), vec![fast.clone()]);
    assert!(!view.snapshot().loading);

    // The first query resolves well after the second one
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(view.providers(), vec![fast]);
    assert_eq!(repo.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_filters_discards_an_in_flight_search() {
    let repo = Arc::new(FakeRepo::new());
    repo.respond("drain", Duration::from_millis(500), vec![provider("Meera Joshi", "Plumbing")]);
    let view = view(&repo);

    view.set_search_term("drain");
    sleep(PAST_DEBOUNCE).await;
    view.set_search_term("");
    sleep(Duration::from_millis(1000)).await;

    let snapshot = view.snapshot();
    assert!(snapshot.providers.is_empty());
    assert!(!snapshot.loading);
}

#[tokio::test(start_paused = true)]
async fn backend_failure_surfaces_generic_error() {
    let repo = Arc::new(FakeRepo::new());
    let listed = provider("Anil Rao", "Electrical Services");
    repo.respond("anil", Duration::ZERO, vec![listed.clone()]);
    repo.fail("broken");
    let view = view(&repo);

    view.set_search_term("anil");
    sleep(PAST_DEBOUNCE).await;
    view.set_search_term("broken");
    sleep(PAST_DEBOUNCE).await;

    let snapshot = view.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.error.as_deref(), Some(SEARCH_FAILED_MESSAGE));
    assert_eq!(view.providers(), vec![listed]);

    // No retry on its own
    sleep(Duration::from_secs(5)).await;
    assert_eq!(repo.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn no_results_message_only_when_filtering() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);
    assert!(view.snapshot().empty_message.is_none());

    view.set_search_term("nobody");
    sleep(PAST_DEBOUNCE).await;

    assert_eq!(view.snapshot().empty_message, Some(NO_RESULTS_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn profile_overlay_opens_and_dismisses_without_touching_results() {
    let repo = Arc::new(FakeRepo::new());
    let electrician = provider("Kavya Iyer", "Electrical Services");
    repo.respond("kavya", Duration::ZERO, vec![electrician.clone()]);
    let view = view(&repo);

    view.set_search_term("kavya");
    sleep(PAST_DEBOUNCE).await;

    let profile = view.select_provider(&electrician.id).unwrap();
    assert_eq!(profile.full_name, "Kavya Iyer");
    assert_eq!(profile.experience, "8 years of experience");
    assert_eq!(view.snapshot().selected_provider.unwrap().id, electrician.id);

    view.dismiss_profile();
    let snapshot = view.snapshot();
    assert!(snapshot.selected_provider.is_none());
    assert_eq!(snapshot.providers.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn contact_does_not_open_the_overlay() {
    let repo = Arc::new(FakeRepo::new());
    let carpenter = provider("Imran Sheikh", "Carpentry");
    repo.respond("imran", Duration::ZERO, vec![carpenter.clone()]);
    let view = view(&repo);

    view.set_search_term("imran");
    sleep(PAST_DEBOUNCE).await;

    let intent = view.contact(&carpenter.id).unwrap();
    assert_eq!(intent.uri, "tel:+919812345678");
    assert!(view.snapshot().selected_provider.is_none());
}

#[tokio::test(start_paused = true)]
async fn compact_layout_has_no_profile_overlay() {
    let repo = Arc::new(FakeRepo::new());
    let carpenter = provider("Imran Sheikh", "Carpentry");
    repo.respond("imran", Duration::ZERO, vec![carpenter.clone()]);
    let view = compact_view(&repo);

    view.set_search_term("imran");
    sleep(PAST_DEBOUNCE).await;

    assert!(matches!(view.select_provider(&carpenter.id), Err(AppError::InvalidInput(_))));
    assert!(view.contact(&carpenter.id).is_ok());
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_the_pending_search() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);

    view.set_search_term("tiles");
    view.teardown();
    sleep(Duration::from_secs(1)).await;

    assert!(repo.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn background_rotates_and_wraps() {
    let repo = Arc::new(FakeRepo::new());
    let view = view(&repo);
    assert_eq!(view.snapshot().background, BACKGROUND_IMAGES[0]);

    sleep(Duration::from_millis(5_100)).await;
    assert_eq!(view.snapshot().background, BACKGROUND_IMAGES[1]);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(view.snapshot().background, BACKGROUND_IMAGES[0]);
}

#[tokio::test(start_paused = true)]
async fn idle_sessions_are_purged() {
    let repo = Arc::new(FakeRepo::new());
    let sessions = SessionStore::new(repo, ViewOptions::default(), 10);

    let idle = sessions.create().await.unwrap();
    sleep(Duration::from_secs(20 * 60)).await;
    let active = sessions.create().await.unwrap();
    sleep(Duration::from_secs(15 * 60)).await;

    assert_eq!(sessions.purge_idle(Duration::from_secs(30 * 60)), 1);
    assert!(matches!(sessions.get(&idle.view.id()), Err(AppError::NotFound(_))));
    assert!(sessions.get(&active.view.id()).is_ok());
}

#[tokio::test(start_paused = true)]
async fn session_limit_refuses_new_views_until_one_closes() {
    let repo = Arc::new(FakeRepo::new());
    let sessions = SessionStore::new(repo, ViewOptions::default(), 1);

    let first = sessions.create().await.unwrap();
    assert!(matches!(sessions.create().await, Err(AppError::Unavailable(_))));
    assert_eq!(sessions.len(), 1);

    sessions.remove(&first.view.id()).unwrap();
    assert!(sessions.create().await.is_ok());
}
