//! Reference league instances.
//!
//! The full 30-team, 6-division MLB topology with ballpark
//! coordinates, used as the crate's reference problem: a 162-game
//! season compressed into 54 three-game series units scheduled over
//! 9 weeks of 8 day slots, weekly cap windows of 7 days, 13-game
//! division rivalries split 7/6, and a 6-opponent breadth minimum
//! (the reachable maximum once 52 of the 54 games go to rivals).

use crate::models::{Division, League, ScheduleRules, SeasonCalendar, Team};

/// Builds the 30-team MLB reference league.
///
/// The configuration is validated; the fixed data cannot fail it.
pub fn mlb() -> League {
    let teams = vec![
        Team::new("Arizona Diamondbacks", 33.4484, -111.9826),
        Team::new("Atlanta Braves", 33.9064, -84.3717),
        Team::new("Baltimore Orioles", 39.2904, -76.6122),
        Team::new("Boston Red Sox", 42.3601, -71.0589),
        Team::new("Chicago Cubs", 41.9484, -87.6553),
        Team::new("Chicago White Sox", 41.8320, -87.6557),
        Team::new("Cincinnati Reds", 39.1021, -84.5163),
        Team::new("Cleveland Guardians", 41.4993, -81.6944),
        Team::new("Colorado Rockies", 39.7392, -105.0118),
        Team::new("Detroit Tigers", 42.3314, -83.0467),
        Team::new("Houston Astros", 29.7604, -95.3698),
        Team::new("Kansas City Royals", 39.0997, -94.5783),
        Team::new("Los Angeles Angels", 33.8352, -117.9776),
        Team::new("Los Angeles Dodgers", 34.0522, -118.2437),
        Team::new("Miami Marlins", 25.7617, -80.1958),
        Team::new("Milwaukee Brewers", 43.0308, -87.9056),
        Team::new("Minnesota Twins", 44.9743, -93.2349),
        Team::new("New York Mets", 40.7503, -73.8486),
        Team::new("New York Yankees", 40.8237, -73.9356),
        Team::new("Oakland Athletics", 37.8198, -122.2711),
        Team::new("Philadelphia Phillies", 39.9526, -75.1639),
        Team::new("Pittsburgh Pirates", 40.4406, -80.0006),
        Team::new("San Diego Padres", 32.7157, -117.1611),
        Team::new("San Francisco Giants", 37.7749, -122.4194),
        Team::new("Seattle Mariners", 47.6062, -122.3321),
        Team::new("St. Louis Cardinals", 38.6277, -90.1946),
        Team::new("Tampa Bay Rays", 27.7557, -82.4604),
        Team::new("Texas Rangers", 32.7170, -96.7509),
        Team::new("Toronto Blue Jays", 43.6416, -79.3894),
        Team::new("Washington Nationals", 38.8730, -77.0074),
    ];

    let divisions = vec![
        Division::new(
            "AL East",
            vec![
                "Baltimore Orioles".into(),
                "Boston Red Sox".into(),
                "New York Yankees".into(),
                "Tampa Bay Rays".into(),
                "Toronto Blue Jays".into(),
            ],
        ),
        Division::new(
            "AL Central",
            vec![
                "Chicago White Sox".into(),
                "Cleveland Guardians".into(),
                "Detroit Tigers".into(),
                "Kansas City Royals".into(),
                "Minnesota Twins".into(),
            ],
        ),
        Division::new(
            "AL West",
            vec![
                "Houston Astros".into(),
                "Los Angeles Angels".into(),
                "Seattle Mariners".into(),
                "Texas Rangers".into(),
                "Oakland Athletics".into(),
            ],
        ),
        Division::new(
            "NL East",
            vec![
                "Atlanta Braves".into(),
                "Miami Marlins".into(),
                "New York Mets".into(),
                "Philadelphia Phillies".into(),
                "Washington Nationals".into(),
            ],
        ),
        Division::new(
            "NL Central",
            vec![
                "Chicago Cubs".into(),
                "Cincinnati Reds".into(),
                "Milwaukee Brewers".into(),
                "Pittsburgh Pirates".into(),
                "St. Louis Cardinals".into(),
            ],
        ),
        Division::new(
            "NL West",
            vec![
                "Arizona Diamondbacks".into(),
                "Colorado Rockies".into(),
                "Los Angeles Dodgers".into(),
                "San Diego Padres".into(),
                "San Francisco Giants".into(),
            ],
        ),
    ];

    let calendar = SeasonCalendar::new(9, 8).with_week_window(7);

    League::new(teams, divisions, calendar, ScheduleRules::default())
        .expect("reference instance is valid")
}
