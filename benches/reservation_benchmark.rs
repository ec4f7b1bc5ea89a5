use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_reservations::{Client, ManagerConfig, ReservationManager, SharedReservationManager};
use rand::{thread_rng, Rng};
use std::thread;

// Create/cancel churn against a manager already holding `size` reservations
pub fn manager_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservation_manager");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut manager = ReservationManager::new(ManagerConfig::default());
                let mut rng = thread_rng();

                for i in 0..size {
                    let client = Client::new(format!("guest{}", i), 30, 1.70);
                    let _ = manager.create(vec![client], rng.gen_range(1..=7), rng.gen_bool(0.5));
                }

                // Mix of rebooking attempts and cancellations
                for _ in 0..100 {
                    let i = rng.gen_range(0..size);
                    if rng.gen_bool(0.5) {
                        let client = Client::new(format!("guest{}", i), 30, 1.70);
                        let _ = manager.create(vec![client], 2, false);
                    } else {
                        let _ = manager.cancel(i as u64 + 1);
                    }
                }

                black_box(manager.len())
            });
        });
    }

    group.finish();
}

pub fn shared_manager_benchmark(c: &mut Criterion) {
    c.bench_function("shared_reservation_manager_4_threads", |b| {
        b.iter(|| {
            let shared = SharedReservationManager::new(ManagerConfig::default());

            let mut handles = vec![];
            for t in 0..4 {
                let shared = shared.clone();
                handles.push(thread::spawn(move || {
                    for j in 0..250 {
                        let client = Client::new(format!("t{}-guest{}", t, j), 30, 1.70);
                        if let Ok(reservation) = shared.create(vec![client], 1, true) {
                            if j % 3 == 0 {
                                let _ = shared.cancel(reservation.id);
                            }
                        }
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(shared.list())
        });
    });
}

criterion_group!(benches, manager_benchmark, shared_manager_benchmark);
criterion_main!(benches);
