use ndarray::Array1;
use optim_testfunctions::*;
use rayon::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_functions_are_send_sync() {
    assert_send_sync::<Griewank>();
    assert_send_sync::<Ackley>();
    assert_send_sync::<Levy>();
    assert_send_sync::<Rosenbrock>();
    assert_send_sync::<BukinN6>();
    assert_send_sync::<Michalewicz>();
    assert_send_sync::<Eggholder>();
    assert_send_sync::<Branin>();
    assert_send_sync::<Box<dyn TestFunction>>();
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let _ = env_logger::builder().is_test(true).try_init();

    for kind in FunctionKind::ALL {
        let f = create_function(kind, 2).unwrap();
        let lower = f.lower_bound().clone();
        let span = f.upper_bound() - f.lower_bound();

        // deterministic grid over the domain, upper edge excluded
        let points: Vec<Array1<f64>> = (0..400)
            .map(|k| {
                let t = Array1::from_vec(vec![(k % 20) as f64 / 20.0, (k / 20) as f64 / 20.0]);
                &lower + &(&span * &t)
            })
            .collect();

        let sequential: Vec<f64> = points.iter().map(|x| f.evaluate(x).unwrap()).collect();
        let parallel: Vec<f64> = points.par_iter().map(|x| f.evaluate(x).unwrap()).collect();

        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(s.to_bits(), p.to_bits(), "{}", kind);
        }
    }
}
