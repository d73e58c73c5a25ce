use accredit_admin::navigation::{Capabilities, SIDEBAR, View, navigation};
use accredit_core::models::user::Role;

#[test]
fn paths_resolve_to_views() {
    assert_eq!(View::from_path("/rooms"), View::Rooms);
    assert_eq!(View::from_path("self-assessment"), View::SelfAssessment);
    assert_eq!(View::from_path("/evaluation/"), View::Evaluation);
    for view in View::ALL {
        assert_eq!(View::from_path(view.path()), view);
    }
}

#[test]
fn empty_and_unknown_paths_land_on_dashboard() {
    assert_eq!(View::from_path(""), View::Dashboard);
    assert_eq!(View::from_path("/"), View::Dashboard);
    assert_eq!(View::from_path("/reports"), View::Dashboard);
}

#[test]
fn admin_sees_everything() {
    let caps = Capabilities::for_role(Role::Admin);
    assert!(View::ALL.into_iter().all(|v| caps.allows(v)));
    assert_eq!(navigation(Role::Admin), SIDEBAR.to_vec());
}

#[test]
fn room_representative_is_limited_to_self_assessment() {
    let caps = Capabilities::for_role(Role::RoomRepresentative);
    assert!(caps.allows(View::SelfAssessment));
    assert!(!caps.allows(View::Evaluation));
    assert!(!caps.allows(View::Rooms));
    assert!(!caps.allows(View::Assignment));
    assert_eq!(
        navigation(Role::RoomRepresentative),
        vec![View::Dashboard, View::Events]
    );
}

#[test]
fn evaluator_sees_rooms_and_evaluation() {
    let caps = Capabilities::for_role(Role::Evaluator);
    assert_eq!(
        caps.views().collect::<Vec<_>>(),
        vec![View::Dashboard, View::Events, View::Rooms, View::Evaluation]
    );
    assert_eq!(
        navigation(Role::Evaluator),
        vec![View::Dashboard, View::Events, View::Rooms]
    );
}
