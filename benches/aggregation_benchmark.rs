use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curmove::analytics::{exercise_progression, monthly_frequency, weekly_exercise_performance};
use curmove::models::{
    DailyLog, DailyPlan, LoggedExerciseData, LoggedSet, PlannedExercise, WorkoutLog, WorkoutPlan,
};

const GROUPS: &[(&str, &str)] = &[
    ("Piernas", "Dominante de Rodilla"),
    ("Pecho", "Empuje Horizontal"),
    ("Espalda", "Tracción Vertical"),
    ("Hombro", "Empuje Vertical"),
    ("Brazos", "Bíceps"),
    ("Core", "Anti-extensión"),
];

/// A fully populated year: 52 weeks, 3 days each, 6 exercises per day with
/// 4 logged sets apiece.
fn build_year() -> (WorkoutPlan, WorkoutLog) {
    let mut plan = WorkoutPlan::new();
    let mut log = WorkoutLog::new();

    for week in 1..=52 {
        for day in 1..=3 {
            let mut daily_plan = DailyPlan::empty(day);
            let mut daily_log = DailyLog::new();

            for (i, (group, pattern)) in GROUPS.iter().enumerate() {
                let mut exercise =
                    PlannedExercise::new(*group, *pattern, format!("Ejercicio {}", i));
                exercise.id = format!("e-{}-{}-{}", week, day, i);

                let sets = (0..4)
                    .map(|s| LoggedSet::new(60.0 + week as f64 + s as f64, 8, 2.0, 8.0))
                    .collect();
                daily_log.insert(exercise.id.clone(), LoggedExerciseData { sets });
                daily_plan.exercises.push(exercise);
            }

            plan.entry(week).or_default().insert(day, daily_plan);
            log.entry(week).or_default().insert(day, daily_log);
        }
    }

    (plan, log)
}

fn benchmark_aggregation(c: &mut Criterion) {
    let (plan, log) = build_year();

    let mut group = c.benchmark_group("aggregation");

    group.bench_function("monthly_frequency", |b| {
        b.iter(|| monthly_frequency(black_box(&plan), black_box(6)))
    });

    group.bench_function("weekly_exercise_performance", |b| {
        b.iter(|| {
            weekly_exercise_performance(
                black_box(&plan),
                black_box(&log),
                black_box(26),
                black_box("Ejercicio 0"),
            )
        })
    });

    group.bench_function("exercise_progression_full_year", |b| {
        b.iter(|| {
            exercise_progression(
                black_box(&plan),
                black_box(&log),
                black_box("Ejercicio 0"),
                black_box(52),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregation);
criterion_main!(benches);
