// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed exercise and metric catalogs, plus the tracking calendar.
//!
//! The planner runs on a 52-week year split into 3 training days per week.
//! "Months" are fixed blocks of weeks derived from `month_of_week`, not
//! calendar months.

use crate::models::{ExerciseList, MainExerciseData};
use chrono::Datelike;

/// Number of tracking weeks in a planning year.
pub const WEEKS_PER_YEAR: u32 = 52;
/// Training days per week.
pub const DAYS_PER_WEEK: u32 = 3;
/// Months per planning year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Predefined warm-up exercises per joint.
pub const WARMUP_EXERCISES: &[(&str, &[&str])] = &[
    (
        "Cervical",
        &[
            "Rotaciones de cuello",
            "Inclinaciones laterales",
            "Flexión y extensión cervical",
        ],
    ),
    (
        "Hombro",
        &[
            "Círculos de brazos",
            "Elevaciones frontales ligeras",
            "Rotaciones cubanas",
        ],
    ),
    (
        "Muñeca",
        &["Círculos de muñeca", "Flexión y extensión de muñeca"],
    ),
    (
        "Cadera",
        &[
            "Círculos de cadera",
            "Balanceos de pierna",
            "Puentes de glúteos",
        ],
    ),
    (
        "Rodilla",
        &["Extensiones de rodilla sentado", "Círculos de rodilla"],
    ),
    (
        "Tobillo",
        &["Círculos de tobillo", "Dorsiflexión y flexión plantar"],
    ),
];

/// Predefined main exercises: muscle group → movement pattern → exercises.
pub const EXERCISE_DATA: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Espalda",
        &[
            (
                "Tracción Vertical",
                &["Dominadas", "Jalón al Pecho", "Dominadas Neutras"],
            ),
            (
                "Tracción Horizontal",
                &["Remo con Barra", "Remo con Mancuerna", "Remo en Polea Baja"],
            ),
        ],
    ),
    (
        "Pecho",
        &[
            (
                "Empuje Horizontal",
                &["Press de Banca", "Press con Mancuernas", "Flexiones"],
            ),
            (
                "Empuje Inclinado",
                &["Press Inclinado con Barra", "Press Inclinado con Mancuernas"],
            ),
        ],
    ),
    (
        "Hombro",
        &[
            (
                "Empuje Vertical",
                &["Press Militar", "Press Arnold", "Push Press"],
            ),
            (
                "Elevaciones Laterales",
                &[
                    "Elevaciones Laterales con Mancuerna",
                    "Elevaciones en Polea",
                ],
            ),
        ],
    ),
    (
        "Piernas",
        &[
            (
                "Dominante de Rodilla",
                &["Sentadillas", "Zancadas", "Prensa de Piernas"],
            ),
            (
                "Dominante de Cadera",
                &["Peso Muerto Rumano", "Hip Thrust", "Buenos Días"],
            ),
        ],
    ),
    (
        "Glúteos",
        &[
            (
                "Empuje de Cadera",
                &["Hip Thrust", "Puente de Glúteos con Barra"],
            ),
            (
                "Abducción",
                &[
                    "Patada de Glúteo en Polea",
                    "Abducción de Cadera en Máquina",
                ],
            ),
        ],
    ),
    (
        "Brazos",
        &[
            (
                "Bíceps",
                &["Curl con Barra", "Curl con Mancuernas", "Curl Martillo"],
            ),
            (
                "Tríceps",
                &[
                    "Press Francés",
                    "Extensiones en Polea Alta",
                    "Fondos en Paralelas",
                ],
            ),
        ],
    ),
    (
        "Core",
        &[
            ("Anti-extensión", &["Plancha Abdominal", "Rueda Abdominal"]),
            ("Anti-rotación", &["Press Pallof", "Leñador en Polea"]),
        ],
    ),
];

/// Perimeter measurement keys and display labels (centimeters).
pub const PERIMETER_METRICS: &[(&str, &str)] = &[
    ("antebrazoIzq", "Antebrazo Izq."),
    ("antebrazoDer", "Antebrazo Der."),
    ("bicepsIzq", "Bíceps Izq."),
    ("bicepsDer", "Bíceps Der."),
    ("hombros", "Hombros"),
    ("pecho", "Pecho"),
    ("espalda", "Espalda"),
    ("cintura", "Cintura"),
    ("gluteo", "Glúteo"),
    ("musloIzq", "Muslo Izq."),
    ("musloDer", "Muslo Der."),
    ("gemeloIzq", "Gemelo Izq."),
    ("gemeloDer", "Gemelo Der."),
];

/// Body composition keys and display labels (percentages).
pub const COMPOSITION_METRICS: &[(&str, &str)] = &[
    ("grasa", "% Grasa"),
    ("muscular", "% Muscular"),
    ("oseo", "% Óseo"),
];

/// Short month names for chart labels.
pub const MONTH_NAMES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// The tracking month a week belongs to: `ceil(week / (52/12))`.
///
/// This yields fixed blocks of 4-5 weeks per month. It is intentionally not
/// a calendar computation; every aggregate windowed "per month" uses this
/// exact boundary.
pub fn month_of_week(week: u32) -> u32 {
    (week as f64 / (WEEKS_PER_YEAR as f64 / MONTHS_PER_YEAR as f64)).ceil() as u32
}

/// All weeks belonging to a tracking month, ascending.
///
/// An out-of-range month yields an empty list.
pub fn weeks_for_month(month: u32) -> Vec<u32> {
    (1..=WEEKS_PER_YEAR)
        .filter(|&w| month_of_week(w) == month)
        .collect()
}

/// Display label for a perimeter metric key.
pub fn perimeter_label(key: &str) -> Option<&'static str> {
    PERIMETER_METRICS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// Display label for a composition metric key.
pub fn composition_label(key: &str) -> Option<&'static str> {
    COMPOSITION_METRICS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// The predefined muscle groups, in catalog order.
pub fn muscle_groups() -> Vec<&'static str> {
    EXERCISE_DATA.iter().map(|(group, _)| *group).collect()
}

/// Movement patterns of a muscle group, in catalog order.
pub fn patterns_for_group(group: &str) -> Vec<&'static str> {
    EXERCISE_DATA
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, patterns)| patterns.iter().map(|(p, _)| *p).collect())
        .unwrap_or_default()
}

/// Warm-up selector options for a joint: predefined entries followed by the
/// user's custom ones.
pub fn warmup_options(joint: &str, custom: &ExerciseList) -> Vec<String> {
    let mut options: Vec<String> = WARMUP_EXERCISES
        .iter()
        .find(|(j, _)| *j == joint)
        .map(|(_, exercises)| exercises.iter().map(|e| e.to_string()).collect())
        .unwrap_or_default();
    if let Some(extra) = custom.get(joint) {
        options.extend(extra.iter().cloned());
    }
    options
}

/// Main-exercise selector options for a (group, pattern): predefined entries
/// followed by the user's custom ones.
pub fn main_exercise_options(group: &str, pattern: &str, custom: &MainExerciseData) -> Vec<String> {
    let mut options: Vec<String> = EXERCISE_DATA
        .iter()
        .find(|(g, _)| *g == group)
        .and_then(|(_, patterns)| patterns.iter().find(|(p, _)| *p == pattern))
        .map(|(_, exercises)| exercises.iter().map(|e| e.to_string()).collect())
        .unwrap_or_default();
    if let Some(extra) = custom.get(group).and_then(|patterns| patterns.get(pattern)) {
        options.extend(extra.iter().cloned());
    }
    options
}

/// The current calendar year, used to preselect composition entry.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// The current calendar month (1..=12), used to preselect composition entry.
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_boundaries() {
        // ceil(1 / 4.33) == 1, ceil(5 / 4.33) == 2
        assert_eq!(month_of_week(1), 1);
        assert_eq!(month_of_week(4), 1);
        assert_eq!(month_of_week(5), 2);
        assert_eq!(month_of_week(52), 12);
    }

    #[test]
    fn test_weeks_for_month_covers_year_exactly_once() {
        let mut seen = Vec::new();
        for month in 1..=MONTHS_PER_YEAR {
            seen.extend(weeks_for_month(month));
        }
        assert_eq!(seen, (1..=WEEKS_PER_YEAR).collect::<Vec<_>>());
    }

    #[test]
    fn test_weeks_for_month_out_of_range() {
        assert!(weeks_for_month(0).is_empty());
        assert!(weeks_for_month(13).is_empty());
    }

    #[test]
    fn test_warmup_options_merge_custom() {
        let mut custom = ExerciseList::new();
        custom.insert("Cadera".to_string(), vec!["Sentadilla Cosaca".to_string()]);

        let options = warmup_options("Cadera", &custom);
        assert_eq!(options.first().map(String::as_str), Some("Círculos de cadera"));
        assert_eq!(options.last().map(String::as_str), Some("Sentadilla Cosaca"));
    }

    #[test]
    fn test_main_exercise_options_unknown_group() {
        let custom = MainExerciseData::new();
        assert!(main_exercise_options("Cuello", "Tracción", &custom).is_empty());
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(perimeter_label("bicepsDer"), Some("Bíceps Der."));
        assert_eq!(composition_label("grasa"), Some("% Grasa"));
        assert_eq!(perimeter_label("inventado"), None);
    }
}
