use linfit::{DifferentiableLossFunction, LossFunction, MlErr, Mse};
use ndarray::{array, Array1, ArrayView1, ArrayView2};

/// Uses only the required methods, so `dl_dw`/`dl_db` fall back to the
/// chain-rule defaults.
struct ComposedMse;

impl LossFunction for ComposedMse {
    fn compute(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> linfit::Result<f64> {
        Mse.compute(y_true, y_pred)
    }
}

impl DifferentiableLossFunction for ComposedMse {
    fn gradient(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> linfit::Result<Array1<f64>> {
        Mse.gradient(y_true, y_pred)
    }
}

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{a} != {b} (tol {tol})");
}

#[test]
fn test_gradient_is_antisymmetric() {
    let a = array![1.0, -3.5, 2.25, 0.0, 8.0];
    let b = array![0.5, 4.0, 2.25, -1.0, 7.5];

    let forward = Mse.gradient(a.view(), b.view()).unwrap();
    let backward = Mse.gradient(b.view(), a.view()).unwrap();

    assert_eq!(forward, -backward);
}

#[test]
fn test_compute_ignores_residual_sign() {
    let y_true = array![1.0, 2.0, 3.0];
    let over = array![1.5, 3.0, 2.0];
    let under = array![0.5, 1.0, 4.0];

    let a = Mse.compute(y_true.view(), over.view()).unwrap();
    let b = Mse.compute(y_true.view(), under.view()).unwrap();

    assert_close(a, b, 1e-15);
}

#[test]
fn test_length_mismatch_always_fails() {
    let base = Array1::from_iter((0..6).map(f64::from));

    for len in 0..6 {
        let short = Array1::from_iter((0..len).map(f64::from));
        for (y_true, y_pred) in [(base.view(), short.view()), (short.view(), base.view())] {
            assert!(matches!(
                Mse.compute(y_true, y_pred),
                Err(MlErr::SizeMismatch { .. })
            ));
            assert!(matches!(
                Mse.gradient(y_true, y_pred),
                Err(MlErr::SizeMismatch { .. })
            ));
            assert!(matches!(
                Mse.dl_db(y_true, y_pred),
                Err(MlErr::SizeMismatch { .. })
            ));
        }
    }
}

#[test]
fn test_zero_residuals() {
    let y = array![1.0, 2.0, 3.0];

    assert_eq!(Mse.compute(y.view(), y.view()).unwrap(), 0.0);
    assert!(Mse.gradient(y.view(), y.view()).unwrap().iter().all(|g| *g == 0.0));
}

#[test]
fn test_closed_forms_agree_with_chain_rule() {
    let x = array![[1.0, -0.5, 2.0], [0.25, 3.0, -1.0], [4.0, 0.0, 0.5], [-2.0, 1.5, 1.0]];
    let y_true = array![0.3, -1.2, 5.5, 2.0];
    let y_pred = array![1.1, -0.7, 4.0, 2.5];

    let check = |x: ArrayView2<f64>| {
        let direct = Mse.dl_dw(x, y_true.view(), y_pred.view()).unwrap();
        let composed = ComposedMse.dl_dw(x, y_true.view(), y_pred.view()).unwrap();
        assert_eq!(direct.len(), x.ncols());
        for (d, c) in direct.iter().zip(composed.iter()) {
            assert_close(*d, *c, 1e-12);
        }
    };
    check(x.view());

    let direct = Mse.dl_db(y_true.view(), y_pred.view()).unwrap();
    let composed = ComposedMse.dl_db(y_true.view(), y_pred.view()).unwrap();
    assert_close(direct, composed, 1e-12);
}

#[test]
fn test_default_dl_dw_checks_rows() {
    let x = array![[1.0], [2.0]];
    let y = array![1.0, 2.0, 3.0];

    let err = ComposedMse.dl_dw(x.view(), y.view(), y.view()).unwrap_err();

    assert!(err.is_invalid_input());
}
