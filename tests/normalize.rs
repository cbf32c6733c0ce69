use tadpole_lastvisit::columns::{RawStatus, RawTables, TableColumns};
use tadpole_lastvisit::normalize::{
    MISSING, current_status_label, exam_month_offset, fill_missing, icv_for_ratio, unify,
    volume_ratio,
};

#[test]
fn status_from_history_string() {
    let s = RawStatus::Text("NL to MCI".to_string());
    assert_eq!(current_status_label(&s), "MCI");
}

#[test]
fn status_without_history_is_returned_whole() {
    let s = RawStatus::Text("MCI".to_string());
    assert_eq!(current_status_label(&s), "MCI");
}

#[test]
fn missing_status_is_empty() {
    assert_eq!(current_status_label(&RawStatus::Missing), "");
}

#[test]
fn status_takes_text_after_last_space() {
    let s = RawStatus::Text("MCI to Dementia".to_string());
    assert_eq!(current_status_label(&s), "Dementia");
}

#[test]
fn nan_becomes_sentinel() {
    let filled = fill_missing(&[1.0, f64::NAN, 3.0]);
    assert_eq!(filled, vec![1.0, MISSING, 3.0]);
}

#[test]
fn icv_forced_to_one_where_volume_missing() {
    let icv = vec![1500000.0, 1600000.0, MISSING];
    let ventricles = vec![MISSING, 30000.0, MISSING];
    let adjusted = icv_for_ratio(&icv, &ventricles);
    assert_eq!(adjusted, vec![1.0, 1600000.0, 1.0]);

    // Missing volume over forced ICV keeps the sentinel through the ratio.
    let ratio = volume_ratio(&ventricles, &adjusted);
    assert_eq!(ratio[0], MISSING);
    assert!((ratio[1] - 30000.0 / 1600000.0).abs() < 1e-15);
}

#[test]
fn exam_month_at_epoch_is_zero() {
    assert_eq!(exam_month_offset("2000-01-01").unwrap(), 0.0);
}

#[test]
fn exam_month_uses_365_day_years() {
    // 2001-01-01 is 366 days after the epoch (2000 was a leap year).
    let m = exam_month_offset("2001-01-01").unwrap();
    assert!((m - 366.0 / 365.0 * 12.0).abs() < 1e-12);
}

#[test]
fn unparseable_exam_date_is_fatal() {
    assert!(exam_month_offset("01/02/2005").is_err());
    assert!(exam_month_offset("").is_err());
}

fn table(rid: Vec<i64>, adas13: Vec<f64>, vent: Vec<f64>, icv: Vec<f64>) -> TableColumns {
    let n = rid.len();
    TableColumns {
        rid,
        adas13,
        ventricles: vent,
        icv,
        dx: vec![RawStatus::Missing; n],
        examdate: vec!["2005-06-01".to_string(); n],
    }
}

#[test]
fn unify_concatenates_first_table_then_second() {
    let tables = RawTables {
        d1d2: table(vec![1, 2], vec![10.0, 11.0], vec![1.0, 2.0], vec![3.0, 4.0]),
        d3: table(vec![3], vec![f64::NAN], vec![5.0], vec![6.0]),
    };
    let columns = unify(&tables).unwrap();
    assert_eq!(columns.rid, vec![1, 2, 3]);
    assert_eq!(columns.adas13, vec![10.0, 11.0, MISSING]);
    assert_eq!(columns.in_target, vec![false, false, true]);
}

#[test]
fn unify_fails_on_bad_exam_date() {
    let mut bad = table(vec![1], vec![10.0], vec![1.0], vec![2.0]);
    bad.examdate = vec!["June 2005".to_string()];
    let tables = RawTables {
        d1d2: bad,
        d3: table(vec![], vec![], vec![], vec![]),
    };
    assert!(unify(&tables).is_err());
}
