use artistly::app::{Action, DashboardStats, Toast};
use artistly::domain::ApplicationStatus;
use artistly::onboarding::{Availability, OnboardingForm};
use artistly::{handle_event, initialize, AppState, ArtistlyError, Config, Event, Route};

fn fresh() -> AppState {
    initialize(&Config::default()).unwrap()
}

fn logged_in() -> AppState {
    let mut state = fresh();
    handle_event(&mut state, &login("manager123")).unwrap();
    state
}

fn login(password: &str) -> Event {
    Event::Login {
        email: "manager@artistly.com".to_string(),
        password: password.to_string(),
    }
}

fn form() -> OnboardingForm {
    OnboardingForm {
        name: "Kavya Iyer".to_string(),
        email: "kavya@example.com".to_string(),
        category: "Singer".to_string(),
        location: "Chennai".to_string(),
        bio: "Carnatic vocalist and playback singer".to_string(),
        experience: "6".to_string(),
        availability: vec![Availability::Weekends, Availability::Evenings],
        profile_image: None,
    }
}

#[test]
fn anonymous_dashboard_visit_redirects_to_login() {
    let mut state = fresh();

    let (changed, actions) = handle_event(&mut state, &Event::Navigate(Route::Dashboard)).unwrap();

    let expected = Route::Login { from: Some("/dashboard".to_string()) };
    assert!(changed);
    assert_eq!(actions, vec![Action::Navigate(expected.clone())]);
    assert_eq!(state.route, expected);
}

#[test]
fn login_returns_to_the_remembered_page() {
    let mut state = fresh();
    handle_event(&mut state, &Event::Navigate(Route::Dashboard)).unwrap();

    let (_, actions) = handle_event(&mut state, &login("manager123")).unwrap();

    assert_eq!(actions, vec![Action::Navigate(Route::Dashboard)]);
    assert_eq!(state.route, Route::Dashboard);
    assert!(state.session.is_manager());
}

#[test]
fn failed_login_leaves_state_alone() {
    let mut state = fresh();
    handle_event(&mut state, &Event::Navigate(Route::Login { from: None })).unwrap();

    let err = handle_event(&mut state, &login("letmein")).unwrap_err();

    assert!(matches!(err, ArtistlyError::InvalidCredentials));
    assert!(state.session.current_user().is_none());
    assert_eq!(state.route, Route::Login { from: None });
}

#[test]
fn logged_in_manager_reaches_dashboard_directly() {
    let mut state = logged_in();
    handle_event(&mut state, &Event::Navigate(Route::Home)).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::Navigate(Route::Dashboard)).unwrap();
    assert_eq!(actions, vec![Action::Navigate(Route::Dashboard)]);
}

#[test]
fn logout_goes_home_with_a_toast() {
    let mut state = logged_in();

    let (_, actions) = handle_event(&mut state, &Event::Logout).unwrap();

    assert_eq!(
        actions,
        vec![
            Action::Navigate(Route::Home),
            Action::Toast(Toast::message("Logged out successfully")),
        ]
    );
    assert!(state.session.current_user().is_none());
    assert_eq!(state.route, Route::Home);
}

#[test]
fn submitted_application_shows_up_pending_on_the_dashboard() {
    let mut state = fresh();
    let before = state.dashboard_stats();

    let (changed, actions) =
        handle_event(&mut state, &Event::SubmitApplication(form())).unwrap();

    assert!(changed);
    assert_eq!(
        actions[0],
        Action::Toast(
            Toast::message("Application Submitted")
                .with_description("Your application has been successfully submitted for review.")
        )
    );
    assert_eq!(actions[1], Action::Navigate(Route::Home));

    let added = &state.registry.applications()[0];
    assert_eq!(added.id, 5);
    assert_eq!(added.name, "Kavya Iyer");
    assert_eq!(added.city, "Chennai");
    assert_eq!(added.fee, "0");
    assert!(added.languages.is_empty());
    assert_eq!(added.profile_image.as_deref(), Some("/placeholder.svg"));
    assert_eq!(added.status, ApplicationStatus::Pending);

    let after = state.dashboard_stats();
    assert_eq!(after.total_applications, before.total_applications + 1);
    assert_eq!(after.pending_applications, before.pending_applications + 1);
}

#[test]
fn invalid_form_lists_every_failing_field() {
    let mut state = fresh();
    let mut bad = form();
    bad.email = "not-an-email".to_string();
    bad.bio = "short".to_string();
    bad.availability.clear();

    let err = handle_event(&mut state, &Event::SubmitApplication(bad)).unwrap_err();

    let ArtistlyError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.message_for("bio"), Some("Bio must be at least 10 characters"));
    assert!(errors.message_for("email").is_some());
    assert!(errors.message_for("availability").is_some());
    assert_eq!(state.registry.len(), 4);
}

#[test]
fn approving_updates_stats_and_toasts() {
    let mut state = logged_in();
    assert_eq!(
        state.dashboard_stats(),
        DashboardStats {
            approved_artists: 2,
            pending_applications: 1,
            total_applications: 4,
            booking_requests: 2,
        }
    );

    let (changed, actions) = handle_event(&mut state, &Event::ApproveApplication(1)).unwrap();

    assert!(changed);
    assert_eq!(
        actions,
        vec![Action::Toast(Toast::message("Ravi Kumar's application has been approved"))]
    );
    let stats = state.dashboard_stats();
    assert_eq!(stats.approved_artists, 3);
    assert_eq!(stats.pending_applications, 0);
    assert_eq!(state.registry.get_by_id(1).unwrap().rating, Some(4.5));
}

#[test]
fn rejecting_a_new_submission() {
    let mut state = logged_in();
    handle_event(&mut state, &Event::SubmitApplication(form())).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::RejectApplication(5)).unwrap();

    assert_eq!(
        actions,
        vec![Action::Toast(Toast::message("Kavya Iyer's application has been rejected"))]
    );
    assert_eq!(state.registry.get_by_id(5).unwrap().status, ApplicationStatus::Rejected);
}

#[test]
fn decisions_on_unknown_or_decided_ids_fail() {
    let mut state = logged_in();

    assert!(matches!(
        handle_event(&mut state, &Event::ApproveApplication(42)),
        Err(ArtistlyError::ApplicationNotFound(42))
    ));
    assert!(matches!(
        handle_event(&mut state, &Event::RejectApplication(2)),
        Err(ArtistlyError::InvalidTransition { id: 2, .. })
    ));
}

#[test]
fn anonymous_decisions_redirect_without_changing_the_registry() {
    let mut state = fresh();

    let (_, actions) = handle_event(&mut state, &Event::ApproveApplication(1)).unwrap();

    assert_eq!(actions, vec![Action::Navigate(Route::login_from(&Route::Dashboard))]);
    assert_eq!(state.registry.get_by_id(1).unwrap().status, ApplicationStatus::Pending);
}

#[test]
fn view_and_message_only_toast() {
    let mut state = logged_in();

    let (changed, actions) = handle_event(&mut state, &Event::ViewApplication(3)).unwrap();
    assert!(!changed);
    assert_eq!(
        actions,
        vec![Action::Toast(Toast::message("Viewing application details for ID: 3"))]
    );

    let (_, actions) =
        handle_event(&mut state, &Event::SendMessage("Sneha Patel".to_string())).unwrap();
    assert_eq!(
        actions,
        vec![Action::Toast(Toast::message("Opening message thread with Sneha Patel"))]
    );
}

#[test]
fn filter_events_drive_the_artist_list() {
    let mut state = fresh();

    let (changed, _) =
        handle_event(&mut state, &Event::CategorySelected("DJ".to_string())).unwrap();
    assert!(changed);
    let names: Vec<_> = state.filtered_artists().iter().map(|a| a.name.clone()).collect();
    assert_eq!(names, vec!["Rajesh Kumar", "Arjun Patel"]);

    let (changed, _) =
        handle_event(&mut state, &Event::CategorySelected("DJ".to_string())).unwrap();
    assert!(!changed);

    handle_event(&mut state, &Event::LocationSelected("Pune".to_string())).unwrap();
    assert_eq!(state.filtered_artists().len(), 1);

    handle_event(&mut state, &Event::SearchChanged("jazz".to_string())).unwrap();
    assert!(state.filtered_artists().is_empty());

    let (changed, _) = handle_event(&mut state, &Event::ClearFilters).unwrap();
    assert!(changed);
    assert_eq!(state.filtered_artists().len(), 6);

    let (changed, _) = handle_event(&mut state, &Event::ClearFilters).unwrap();
    assert!(!changed);
}

#[test]
fn all_sentinel_clears_a_selection() {
    let mut state = fresh();
    handle_event(&mut state, &Event::PriceRangeSelected("10k-20k".to_string())).unwrap();
    assert_eq!(state.filtered_artists().len(), 1);

    handle_event(&mut state, &Event::PriceRangeSelected("all".to_string())).unwrap();
    assert!(state.filter.is_default());
}

#[test]
fn states_are_independent() {
    let mut first = logged_in();
    let second = fresh();

    handle_event(&mut first, &Event::ApproveApplication(1)).unwrap();

    assert_eq!(second.registry.get_by_id(1).unwrap().status, ApplicationStatus::Pending);
    assert!(second.session.current_user().is_none());
}
