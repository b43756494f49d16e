/*!
 * Scheduler Benchmarks
 *
 * Ready queue insertion cost and end-to-end event throughput per scheme
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sched_sim::{Job, OrderedQueue, Scheduler, Scheme};

fn bench_queue_offer_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_offer_poll");

    for size in [16u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = OrderedQueue::new(Scheme::Sjf);
                for id in 0..size {
                    let run_time = u64::from(id.wrapping_mul(2_654_435_761) % 97);
                    queue.offer(Job::new(id, u64::from(id), run_time, 0)).unwrap();
                }
                while let Some(job) = queue.poll() {
                    black_box(job);
                }
            });
        });
    }

    group.finish();
}

fn bench_event_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_throughput");

    for scheme in Scheme::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(scheme.as_str()),
            &scheme,
            |b, &scheme| {
                b.iter(|| {
                    let mut scheduler = Scheduler::start_up(4, scheme).unwrap();
                    // Arrivals every tick, then drain core 0..3 in turn
                    for id in 0..512u32 {
                        let priority = (id % 7) as i32;
                        scheduler
                            .new_job(id, u64::from(id), u64::from(id % 13 + 1), priority)
                            .unwrap();
                    }
                    let mut time = 512;
                    loop {
                        let mut progressed = false;
                        for core in 0..4 {
                            if let Some(id) = scheduler.running_job(core) {
                                time += 1;
                                scheduler.job_finished(core, id, time).unwrap();
                                progressed = true;
                            }
                        }
                        if !progressed {
                            break;
                        }
                    }
                    black_box(scheduler.clean_up());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_queue_offer_poll, bench_event_throughput);
criterion_main!(benches);
