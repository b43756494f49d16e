/*!
 * Simulation Tests
 * Seeded random workloads driven through a discrete-event harness
 */

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sched_sim::{init_tracing, CoreId, JobId, Scheduler, Scheme, Ticks};

const QUANTUM: Ticks = 3;

#[derive(Debug, Clone, Copy)]
struct Arrival {
    id: JobId,
    time: Ticks,
    run_time: Ticks,
    priority: i32,
}

fn workload(seed: u64, count: u32) -> Vec<Arrival> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut time = 0;
    (1..=count)
        .map(|id| {
            time += rng.gen_range(1..6);
            Arrival {
                id,
                time,
                run_time: rng.gen_range(1..12),
                priority: rng.gen_range(0..5),
            }
        })
        .collect()
}

/// Next event on a busy core: completion, or quantum expiry under round robin
fn next_core_event(
    scheduler: &Scheduler,
    core: CoreId,
    started: Ticks,
) -> Option<(Ticks, bool)> {
    let job = scheduler.core(core)?;
    let completion = started + job.remaining_time();
    if scheduler.scheme() == Scheme::Rr && started + QUANTUM < completion {
        Some((started + QUANTUM, false))
    } else {
        Some((completion, true))
    }
}

/// Run `arrivals` to completion, returning the scheduler once drained
fn simulate(scheme: Scheme, cores: usize, arrivals: &[Arrival]) -> Scheduler {
    let mut scheduler = Scheduler::start_up(cores, scheme).unwrap();
    let mut started: Vec<Ticks> = vec![0; cores];
    let mut pending = arrivals.iter().peekable();

    loop {
        let core_event = (0..cores)
            .filter_map(|core| next_core_event(&scheduler, core, started[core]).map(|e| (e, core)))
            .min_by_key(|((time, finishes), core)| (*time, !*finishes, *core));

        match (core_event, pending.peek()) {
            (None, None) => break,
            (Some(((time, finishes), core)), next)
                if next.map_or(true, |arrival| time <= arrival.time) =>
            {
                let next_job = if finishes {
                    let id = scheduler.running_job(core).unwrap();
                    scheduler.job_finished(core, id, time).unwrap()
                } else {
                    scheduler.quantum_expired(core, time).unwrap()
                };
                if next_job.is_some() {
                    started[core] = time;
                }
            }
            (_, Some(arrival)) => {
                let arrival = **arrival;
                pending.next();
                if let Some(core) = scheduler
                    .new_job(arrival.id, arrival.time, arrival.run_time, arrival.priority)
                    .unwrap()
                {
                    started[core] = arrival.time;
                }
            }
            (Some(_), None) => unreachable!("guard accepts any core event when nothing is pending"),
        }
    }

    scheduler
}

#[test]
fn test_every_scheme_drains_workload() {
    init_tracing();

    for seed in 0..8 {
        let arrivals = workload(seed, 40);
        let total_service: Ticks = arrivals.iter().map(|a| a.run_time).sum();

        for scheme in Scheme::ALL {
            for cores in [1, 2, 4] {
                let scheduler = simulate(scheme, cores, &arrivals);
                let stats = scheduler.stats();

                assert_eq!(stats.completed_jobs, arrivals.len() as u64, "{scheme} on {cores} cores");
                assert_eq!(stats.running, 0);
                assert_eq!(stats.queued, 0);
                assert_eq!(
                    stats.total_turnaround - stats.total_waiting,
                    total_service,
                    "{scheme} on {cores} cores, seed {seed}"
                );
                assert!(stats.total_response <= stats.total_waiting);

                if !scheme.is_preemptive() && scheme != Scheme::Rr {
                    assert_eq!(stats.total_response, stats.total_waiting);
                    assert_eq!(stats.preemptions, 0);
                }
            }
        }
    }
}

#[test]
fn test_short_jobs_wait_less_under_sjf() {
    let arrivals: Vec<Arrival> = (1..=12)
        .map(|id| Arrival {
            id,
            time: Ticks::from(id),
            run_time: if id % 3 == 0 { 1 } else { 9 },
            priority: 0,
        })
        .collect();

    let fcfs = simulate(Scheme::Fcfs, 1, &arrivals);
    let sjf = simulate(Scheme::Sjf, 1, &arrivals);
    let psjf = simulate(Scheme::Psjf, 1, &arrivals);

    let fcfs_wait = fcfs.average_waiting_time().unwrap();
    let sjf_wait = sjf.average_waiting_time().unwrap();
    let psjf_wait = psjf.average_waiting_time().unwrap();

    assert!(sjf_wait < fcfs_wait);
    assert!(psjf_wait <= sjf_wait);
    let fcfs_service = fcfs.average_turnaround_time().unwrap() - fcfs_wait;
    let sjf_service = sjf.average_turnaround_time().unwrap() - sjf_wait;
    assert!((fcfs_service - sjf_service).abs() < 1e-9);
}

#[test]
fn test_round_robin_response_beats_fcfs() {
    let arrivals: Vec<Arrival> = (1..=6)
        .map(|id| Arrival {
            id,
            time: Ticks::from(id),
            run_time: 20,
            priority: 0,
        })
        .collect();

    let fcfs = simulate(Scheme::Fcfs, 1, &arrivals);
    let rr = simulate(Scheme::Rr, 1, &arrivals);

    assert!(rr.average_response_time().unwrap() < fcfs.average_response_time().unwrap());
    assert!(rr.stats().preemptions > 0);
}
