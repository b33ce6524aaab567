use tempfile::tempdir;
use timeportal::core::add::AddLogic;
use timeportal::core::calculator::average::{average_hours, monthly_average_due};
use timeportal::core::context::SessionContext;
use timeportal::core::report::ReportLogic;
use timeportal::models::{DayTotals, EntryDraft};
use timeportal::store::JsonFileStore;
use timeportal::utils::zone::Zone;

mod common;
use common::{at, d};

fn worked(minutes: i64) -> DayTotals {
    DayTotals {
        minutes,
        miss_punch: false,
    }
}

#[test]
fn zero_days_stay_out_of_the_average() {
    let week = [worked(480), worked(480), worked(0), worked(0), worked(0)];

    let avg = average_hours(&week);

    assert_eq!(avg.hours, 8.0);
    assert_eq!(avg.counted_days, 2);
    assert_eq!(avg.miss_punch_days, 0);
}

#[test]
fn miss_punch_days_are_excluded_and_counted() {
    let days = [
        worked(420),
        DayTotals {
            minutes: 60,
            miss_punch: true,
        },
        worked(540),
    ];

    let avg = average_hours(&days);

    assert_eq!(avg.hours, 8.0);
    assert_eq!(avg.counted_days, 2);
    assert_eq!(avg.miss_punch_days, 1);
}

#[test]
fn no_worked_day_gives_zero() {
    let avg = average_hours(&[worked(0)]);
    assert_eq!(avg.hours, 0.0);
    assert_eq!(avg.counted_days, 0);
}

#[test]
fn monthly_average_starts_from_configured_day() {
    assert!(!monthly_average_due(d(2025, 7, 7), 8));
    assert!(monthly_average_due(d(2025, 7, 8), 8));
    assert!(monthly_average_due(d(2025, 7, 2), 1));
}

#[test]
fn report_averages_the_week_of_the_reference_day() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path(), "tester").unwrap();
    let ctx = SessionContext::at("tester", Zone::utc(), at(d(2025, 7, 16), 18, 0, 0));

    // Mon and Tue of the same week, plus the previous Sunday
    for (day, out_h) in [(d(2025, 7, 14), 17), (d(2025, 7, 15), 17), (d(2025, 7, 13), 10)] {
        let draft = EntryDraft::new(Some(at(day, 9, 0, 0)), Some(at(day, out_h, 0, 0)));
        AddLogic::apply(&mut store, &ctx, day, draft).unwrap();
    }

    let report = ReportLogic::build(&mut store, &ctx, d(2025, 7, 16), 8).unwrap();

    assert_eq!(report.week_start, d(2025, 7, 14));
    assert_eq!(report.week_end, d(2025, 7, 20));
    assert_eq!(report.week.hours, 8.0);
    assert_eq!(report.week.counted_days, 2);

    let month = report.month.expect("monthly average from the 8th");
    assert_eq!(month.counted_days, 3);
    assert_eq!(month.hours, 17.0 / 3.0);
}

#[test]
fn report_has_no_monthly_average_early_in_the_month() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path(), "tester").unwrap();
    let ctx = SessionContext::at("tester", Zone::utc(), at(d(2025, 7, 3), 12, 0, 0));

    let report = ReportLogic::build(&mut store, &ctx, d(2025, 7, 3), 8).unwrap();

    assert!(report.month.is_none());
    assert_eq!(report.week.counted_days, 0);
}
