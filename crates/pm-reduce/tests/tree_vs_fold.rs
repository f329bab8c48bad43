use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pm_matmul::ParallelBackend;
use pm_matrix::{CpuBackend, MatmulBackend, Matrix, WorkerPool};
use pm_reduce::{fold_sequential, SplitPoint, TreeReducer};

fn random_sequence(n: usize, size: usize, seed: u64) -> Vec<Matrix<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Matrix::from_fn(size, |_, _| rng.gen_range(-3..=3)).unwrap())
        .collect()
}

#[test]
fn test_parallel_kernel_as_combine() {
    let pool = WorkerPool::fixed().unwrap();
    let parallel = ParallelBackend::new(&pool);
    let cpu = CpuBackend::new();
    for n in [1, 2, 3, 8, 13] {
        let seq = random_sequence(n, 5, n as u64);
        let expected = fold_sequential(&cpu, seq.clone()).unwrap();
        let r = TreeReducer::new(&pool, &parallel).reduce(seq).unwrap();
        assert_eq!(r, expected, "n={n}");
    }
}

#[test]
fn test_regrouping_does_not_change_product() {
    let pool = WorkerPool::fixed().unwrap();
    let cpu = CpuBackend::new();
    let seq = random_sequence(11, 3, 42);
    let balanced = TreeReducer::new(&pool, &cpu).reduce(seq.clone()).unwrap();
    for split in [SplitPoint::AfterFirst, SplitPoint::BeforeLast] {
        let r = TreeReducer::new(&pool, &cpu)
            .with_split(split)
            .reduce(seq.clone())
            .unwrap();
        assert_eq!(r, balanced, "{split:?}");
    }
}

#[test]
fn test_reversed_sequence_differs() {
    let pool = WorkerPool::fixed().unwrap();
    let cpu = CpuBackend::new();
    let a = Matrix::from_vec(2, vec![1i64, 2, 0, 1]).unwrap();
    let b = Matrix::from_vec(2, vec![1i64, 0, 3, 1]).unwrap();
    let c = Matrix::from_vec(2, vec![0i64, 1, 1, 0]).unwrap();

    let forward = TreeReducer::new(&pool, &cpu)
        .reduce(vec![a.clone(), b.clone(), c.clone()])
        .unwrap();
    let backward = TreeReducer::new(&pool, &cpu)
        .reduce(vec![c.clone(), b.clone(), a.clone()])
        .unwrap();
    assert_ne!(forward, backward);

    let ab = cpu.matmul(&a, &b).unwrap();
    assert_eq!(forward, cpu.matmul(&ab, &c).unwrap());
}

#[test]
fn test_width_independent() {
    let one = WorkerPool::new(1).unwrap();
    let four = WorkerPool::fixed().unwrap();
    let cpu = CpuBackend::new();
    let seq = random_sequence(20, 4, 7);
    assert_eq!(
        TreeReducer::new(&one, &cpu).reduce(seq.clone()).unwrap(),
        TreeReducer::new(&four, &cpu).reduce(seq).unwrap()
    );
}
