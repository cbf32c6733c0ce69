use tadpole_lastvisit::math::stats::polyfit_linear;

#[test]
fn exact_line_recovered() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 0.5).collect();
    let fit = polyfit_linear(&x, &y).unwrap();
    assert!((fit.slope - 2.5).abs() < 1e-12);
    assert!((fit.intercept + 0.5).abs() < 1e-12);
}

#[test]
fn least_squares_through_noisy_points() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![0.1, 0.9, 2.1, 2.9];
    let fit = polyfit_linear(&x, &y).unwrap();
    assert!((fit.slope - 0.96).abs() < 1e-12);
    assert!((fit.intercept - 0.06).abs() < 1e-12);
}

#[test]
fn eval_is_affine() {
    let x = vec![0.0, 10.0];
    let y = vec![1.0, 21.0];
    let fit = polyfit_linear(&x, &y).unwrap();
    assert!((fit.eval(5.0) - 11.0).abs() < 1e-12);
    assert!((fit.eval(-5.0) + 9.0).abs() < 1e-12);
}

#[test]
fn degenerate_inputs_rejected() {
    assert!(polyfit_linear(&[], &[]).is_err());
    assert!(polyfit_linear(&[1.0], &[2.0]).is_err());
    assert!(polyfit_linear(&[3.0, 3.0], &[1.0, 2.0]).is_err());
    assert!(polyfit_linear(&[1.0, 2.0], &[1.0]).is_err());
}
