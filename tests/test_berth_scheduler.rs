use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use berth_planner::domain::berth::BerthIndex;
use berth_planner::{Assignment, BerthScheduler, SelectionStrategy, SentinelPolicy, ShipRequest, schedule};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap().and_hms_opt(hour, minute, 0).unwrap()
}

fn ship(name: &str, hour: u32, duration: i64) -> ShipRequest {
    ShipRequest::new(name, at(hour, 0), duration, 1000)
}

fn summary(assignments: &[Assignment]) -> Vec<(&str, BerthIndex, NaiveDateTime, NaiveDateTime)> {
    assignments.iter().map(|a| (a.ship_name.as_str(), a.berth, a.start, a.end)).collect()
}

#[test]
fn test_reference_scenario() {
    let ships = vec![ship("A", 8, 3), ship("B", 8, 2), ship("C", 9, 1)];

    for selection in [SelectionStrategy::LinearScan, SelectionStrategy::PriorityQueue] {
        let assignments = BerthScheduler::new(selection, SentinelPolicy::EarliestArrival).schedule(2, &ships).unwrap();

        assert_eq!(
            summary(&assignments),
            vec![
                ("A", BerthIndex(0), at(8, 0), at(11, 0)),
                ("B", BerthIndex(1), at(8, 0), at(10, 0)),
                ("C", BerthIndex(1), at(10, 0), at(11, 0)),
            ],
            "selection {:?}",
            selection
        );
    }
}

#[test]
fn test_empty_ship_list_is_not_an_error() {
    assert_eq!(schedule(1, &[]).unwrap(), Vec::new());
}

#[test]
fn test_single_berth_without_overlap_has_no_waiting() {
    // Each ship arrives after the previous one has left.
    let ships = vec![ship("A", 6, 2), ship("B", 9, 1), ship("C", 10, 3)];
    let assignments = schedule(1, &ships).unwrap();

    assert_eq!(
        summary(&assignments),
        vec![
            ("A", BerthIndex(0), at(6, 0), at(8, 0)),
            ("B", BerthIndex(0), at(9, 0), at(10, 0)),
            ("C", BerthIndex(0), at(10, 0), at(13, 0)),
        ]
    );
    assert!(assignments.iter().all(|a| a.waiting() == TimeDelta::zero()));
}

#[test]
fn test_single_berth_with_overlap_serializes_back_to_back() {
    let ships = vec![ship("A", 6, 4), ship("B", 7, 2), ship("C", 8, 1)];
    let assignments = schedule(1, &ships).unwrap();

    assert_eq!(
        summary(&assignments),
        vec![
            ("A", BerthIndex(0), at(6, 0), at(10, 0)),
            ("B", BerthIndex(0), at(10, 0), at(12, 0)),
            ("C", BerthIndex(0), at(12, 0), at(13, 0)),
        ]
    );
    assert_eq!(assignments[1].waiting(), TimeDelta::try_hours(3).unwrap());
    assert_eq!(assignments[2].waiting(), TimeDelta::try_hours(4).unwrap());
}

#[test]
fn test_equal_arrivals_keep_input_order() {
    let ships = vec![ship("Third", 7, 1), ship("First", 5, 1), ship("Second", 7, 1), ship("Fourth", 7, 1)];
    let assignments = schedule(4, &ships).unwrap();

    let names: Vec<&str> = assignments.iter().map(|a| a.ship_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Third", "Second", "Fourth"]);

    // Berths 2-4 have been free since 05:00, before Berth 1, so the tied ships
    // take them in input order.
    let berths: Vec<usize> = assignments.iter().map(|a| a.berth.get()).collect();
    assert_eq!(berths, vec![0, 1, 2, 3]);
}

#[test]
fn test_duplicate_names_are_told_apart_by_position() {
    let ships = vec![ship("Twin", 9, 1), ship("Twin", 8, 1)];
    let assignments = schedule(2, &ships).unwrap();

    let positions: Vec<usize> = assignments.iter().map(|a| a.input_position).collect();
    assert_eq!(positions, vec![1, 0]);
}

#[test]
fn test_containers_do_not_affect_schedule() {
    let light = vec![ShipRequest::new("A", at(8, 0), 2, 0), ShipRequest::new("B", at(8, 30), 2, 0)];
    let heavy = vec![ShipRequest::new("A", at(8, 0), 2, 5000), ShipRequest::new("B", at(8, 30), 2, 4999)];

    let light_schedule = schedule(1, &light).unwrap();
    let heavy_schedule = schedule(1, &heavy).unwrap();

    assert_eq!(summary(&light_schedule), summary(&heavy_schedule));
    assert_eq!(heavy_schedule[0].containers, 5000);
    assert_eq!(heavy_schedule[1].containers, 4999);
}

#[test]
fn test_fixed_sentinel_never_delays_a_ship() {
    let ships = vec![ShipRequest::new("Early", at(3, 15), 1, 0)];
    let scheduler = BerthScheduler::new(SelectionStrategy::LinearScan, SentinelPolicy::Fixed(at(12, 0)));

    let assignments = scheduler.schedule(2, &ships).unwrap();
    assert_eq!(assignments[0].start, at(3, 15));
}

#[test]
fn test_schedule_across_midnight() {
    let ships = vec![ShipRequest::new("Night", at(22, 0), 5, 0)];
    let assignments = schedule(1, &ships).unwrap();

    assert_eq!(assignments[0].end, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap().and_hms_opt(3, 0, 0).unwrap());
}

#[test]
fn test_parallel_runs_with_shared_scheduler() {
    let scheduler = BerthScheduler::default();
    let ships: Vec<ShipRequest> = (0..12).map(|i| ship(&format!("S{}", i), 6 + (i % 5), 1 + (i as i64 % 3))).collect();

    let ships = &ships;

    let results: Vec<Vec<Assignment>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4).map(|berths| scope.spawn(move || scheduler.schedule(berths, ships).unwrap())).collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    for (berths, result) in (1..=4).zip(&results) {
        assert_eq!(result, &scheduler.schedule(berths, ships).unwrap());
    }
}
