use accredit_workspace::Workspace;
use accredit_workspace::dashboard::DashboardSummary;
use jiff::civil::date;

#[test]
fn summary_from_seeded_workspace() {
    let workspace = Workspace::seeded().unwrap();
    let summary = DashboardSummary::summarize(&workspace, date(2023, 6, 10));

    assert_eq!(summary.active_events, 2);
    // Emergency Department Audit ends on June 15th.
    assert_eq!(summary.upcoming_deadlines, 1);
    assert_eq!(summary.rooms_self_assessed.completed, 3);
    assert_eq!(summary.rooms_self_assessed.total, 6);
    assert_eq!(summary.rooms_self_assessed.percentage, 50);
    assert_eq!(summary.rooms_evaluated.completed, 1);
    assert_eq!(summary.users, 5);
}

#[test]
fn deadline_window_is_inclusive() {
    let workspace = Workspace::seeded().unwrap();
    let deadlines = |y, m, d| DashboardSummary::summarize(&workspace, date(y, m, d)).upcoming_deadlines;

    // Exactly seven days before the Q2 assessment closes on June 30th.
    assert_eq!(deadlines(2023, 6, 23), 1);
    // The audit closes on June 15th, the last day of this window.
    assert_eq!(deadlines(2023, 6, 8), 1);
    // Between the two closing dates nothing is due within a week.
    assert_eq!(deadlines(2023, 6, 16), 0);
    assert_eq!(deadlines(2023, 7, 1), 0);
}
