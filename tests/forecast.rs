use tadpole_lastvisit::columns::ColumnSet;
use tadpole_lastvisit::forecast::defaults::PopulationDefaults;
use tadpole_lastvisit::forecast::subject::{forecast_subject, round_9dp, status_probabilities};
use tadpole_lastvisit::forecast::target_cohort;
use tadpole_lastvisit::normalize::MISSING;

struct Row {
    rid: i64,
    adas13: f64,
    ventricles: f64,
    icv: f64,
    status: &'static str,
    exam_month: f64,
    in_target: bool,
}

fn row(rid: i64, status: &'static str, exam_month: f64) -> Row {
    Row {
        rid,
        adas13: MISSING,
        ventricles: MISSING,
        icv: 1.0,
        status,
        exam_month,
        in_target: true,
    }
}

fn build(rows: Vec<Row>) -> ColumnSet {
    ColumnSet {
        rid: rows.iter().map(|r| r.rid).collect(),
        adas13: rows.iter().map(|r| r.adas13).collect(),
        ventricles: rows.iter().map(|r| r.ventricles).collect(),
        icv: rows.iter().map(|r| r.icv).collect(),
        ventricles_icv: rows.iter().map(|r| r.ventricles / r.icv).collect(),
        status: rows.iter().map(|r| r.status.to_string()).collect(),
        exam_month: rows.iter().map(|r| r.exam_month).collect(),
        in_target: rows.iter().map(|r| r.in_target).collect(),
    }
}

/// Observation block whose ratio column lies exactly on
/// ratio = ventricles / 100000.
fn fit_block() -> Vec<Row> {
    [10000.0, 20000.0, 30000.0]
        .into_iter()
        .enumerate()
        .map(|(i, v)| Row {
            rid: 1000 + i as i64,
            adas13: MISSING,
            ventricles: v,
            icv: 100000.0,
            status: "",
            exam_month: i as f64,
            in_target: false,
        })
        .collect()
}

#[test]
fn defaults_mapped_through_the_fitted_line() {
    let columns = build(fit_block());
    let d = PopulationDefaults::from_observations(&columns).unwrap();
    assert!((d.fit.slope - 1e-5).abs() < 1e-15);
    assert!(d.fit.intercept.abs() < 1e-12);
    assert!((d.ventricles_icv_typical - 0.25).abs() < 1e-12);
    assert!((d.ventricles_icv_broad_margin - 0.2).abs() < 1e-12);
    assert!((d.ventricles_icv_default_margin - 0.01).abs() < 1e-12);
    assert_eq!(d.adas13_typical, 12.0);
    assert_eq!(d.adas13_margin, 10.0);
}

#[test]
fn defaults_need_two_distinct_volumes() {
    let mut rows = fit_block();
    rows.truncate(1);
    let columns = build(rows);
    assert!(PopulationDefaults::from_observations(&columns).is_err());
}

#[test]
fn status_probability_mapping() {
    assert_eq!(
        (1.0, 0.0, 0.0),
        triple(status_probabilities("NL", false))
    );
    assert_eq!(
        (0.0, 1.0, 0.0),
        triple(status_probabilities("MCI", false))
    );
    assert_eq!(
        (0.0, 0.0, 1.0),
        triple(status_probabilities("Dementia", false))
    );
    assert_eq!(
        (0.33, 0.33, 0.34),
        triple(status_probabilities("", false))
    );
    assert_eq!(
        (0.33, 0.33, 0.34),
        triple(status_probabilities("SMC", true))
    );
}

fn triple(p: tadpole_lastvisit::forecast::StatusProbs) -> (f64, f64, f64) {
    (p.cn, p.mci, p.ad)
}

#[test]
fn score_carried_forward_with_unit_interval() {
    let mut rows = fit_block();
    let mut with_score = row(7, "", 5.0);
    with_score.adas13 = 20.0;
    rows.push(with_score);
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert_eq!(f.adas13.best, 20.0);
    assert_eq!(f.adas13.lower, 19.0);
    assert_eq!(f.adas13.upper, 21.0);
}

#[test]
fn score_interval_clamped_at_zero() {
    let mut rows = fit_block();
    let mut with_score = row(7, "", 5.0);
    with_score.adas13 = 0.5;
    rows.push(with_score);
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert_eq!(f.adas13.best, 0.5);
    assert_eq!(f.adas13.lower, 0.0);
    assert_eq!(f.adas13.upper, 1.5);
}

#[test]
fn missing_score_history_uses_population_defaults() {
    let mut rows = fit_block();
    rows.push(row(7, "NL", 5.0));
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert_eq!(f.adas13.best, 12.0);
    assert_eq!(f.adas13.lower, 2.0);
    assert_eq!(f.adas13.upper, 22.0);
    assert_eq!(triple(f.status), (1.0, 0.0, 0.0));
}

#[test]
fn ratio_carried_forward_with_default_margin() {
    let mut rows = fit_block();
    let mut with_ratio = row(7, "", 8.0);
    with_ratio.ventricles = 40000.0;
    with_ratio.icv = 100000.0;
    rows.push(with_ratio);
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert!((f.ventricles_icv.best - 0.4).abs() < 1e-9);
    assert!((f.ventricles_icv.lower - 0.39).abs() < 1e-9);
    assert!((f.ventricles_icv.upper - 0.41).abs() < 1e-9);
}

#[test]
fn missing_imaging_history_uses_typical_volume() {
    let mut rows = fit_block();
    rows.push(row(7, "", 5.0));
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert!((f.ventricles_icv.best - 0.25).abs() < 1e-9);
    assert!((f.ventricles_icv.lower - 0.05).abs() < 1e-9);
    assert!((f.ventricles_icv.upper - 0.45).abs() < 1e-9);
}

#[test]
fn non_target_rows_are_ignored_for_subjects() {
    let mut rows = fit_block();
    let mut target = row(7, "MCI", 5.0);
    target.adas13 = 15.0;
    rows.push(target);
    // Later visit, but outside the target subset.
    let mut historical = row(7, "Dementia", 20.0);
    historical.adas13 = 30.0;
    historical.in_target = false;
    rows.push(historical);
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert_eq!(f.adas13.best, 15.0);
    assert_eq!(triple(f.status), (0.0, 1.0, 0.0));
}

#[test]
fn status_tie_break_reflects_later_row() {
    let mut rows = fit_block();
    rows.push(row(7, "MCI", 8.0));
    rows.push(row(7, "Dementia", 8.0));
    let columns = build(rows);
    let d = PopulationDefaults::from_observations(&columns).unwrap();

    let f = forecast_subject(&columns, &d, 7, false);
    assert_eq!(triple(f.status), (0.0, 0.0, 1.0));
}

#[test]
fn cohort_is_sorted_and_distinct() {
    let rows = vec![row(9, "", 1.0), row(3, "", 2.0), row(9, "", 3.0), {
        let mut r = row(4, "", 1.0);
        r.in_target = false;
        r
    }];
    let columns = build(rows);
    assert_eq!(target_cohort(&columns), vec![3, 9]);
}

#[test]
fn rounding_is_nine_decimal_places() {
    let x = 0.123456789123456;
    let r = round_9dp(x);
    assert!((x - r).abs() < 1e-9);
    assert_eq!(round_9dp(0.1234567894), 0.123456789);
    assert_eq!(round_9dp(0.1234567896), 0.12345679);
}
