// SPDX-License-Identifier: MIT

//! Seed the database with demo data (dev-tools only).
//!
//! Recreates the database file from scratch: two teams, a roster of heroes
//! with profiles and leaderboard entries, a spread of logged activities, and
//! a workout plan per difficulty level.

use std::path::PathBuf;

use teamfit_tracker::db::SqliteDb;
use teamfit_tracker::models::{
    ActivityPatch, ActivityType, Difficulty, Intensity, LeaderboardPatch, NewActivity, NewTeam,
    NewWorkout, ProfilePatch, Registration,
};
use teamfit_tracker::services::password::hash_password;

struct Hero {
    username: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    bio: &'static str,
    team: usize, // index into the seeded teams
    points: i64,
}

const HEROES: &[Hero] = &[
    Hero {
        username: "ironman",
        email: "ironman@marvel.com",
        first_name: "Tony",
        last_name: "Stark",
        bio: "Genius billionaire philanthropist",
        team: 0,
        points: 9500,
    },
    Hero {
        username: "captainamerica",
        email: "captainamerica@marvel.com",
        first_name: "Steve",
        last_name: "Rogers",
        bio: "The first Avenger",
        team: 0,
        points: 10000,
    },
    Hero {
        username: "blackwidow",
        email: "blackwidow@marvel.com",
        first_name: "Natasha",
        last_name: "Romanoff",
        bio: "Master spy",
        team: 0,
        points: 8700,
    },
    Hero {
        username: "batman",
        email: "batman@dc.com",
        first_name: "Bruce",
        last_name: "Wayne",
        bio: "The Dark Knight of Gotham",
        team: 1,
        points: 9800,
    },
    Hero {
        username: "wonderwoman",
        email: "wonderwoman@dc.com",
        first_name: "Diana",
        last_name: "Prince",
        bio: "Amazonian princess",
        team: 1,
        points: 9900,
    },
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = std::env::var("DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/teamfit.sqlite"));

    // Start from an empty file so seeding is repeatable
    if db_path.exists() {
        std::fs::remove_file(&db_path)?;
        println!("Removed existing database at {}", db_path.display());
    }

    let db = SqliteDb::open(&db_path)?;
    println!("Seeding database at {}", db_path.display());

    let teams = [
        db.create_team(&NewTeam {
            name: "Team Marvel".to_string(),
            description: "The mighty superheroes team with extraordinary powers".to_string(),
        })?,
        db.create_team(&NewTeam {
            name: "Team DC".to_string(),
            description: "The justice seekers dedicated to protecting the world".to_string(),
        })?,
    ];

    let activity_types = [
        (ActivityType::Running, 5.0),
        (ActivityType::Cycling, 20.0),
        (ActivityType::Swimming, 2.0),
        (ActivityType::Gym, 0.0),
    ];

    for (i, hero) in HEROES.iter().enumerate() {
        let password_hash = hash_password("training2024")?;
        let account = db.register_account(
            &Registration {
                username: hero.username.to_string(),
                email: hero.email.to_string(),
                first_name: hero.first_name.to_string(),
                last_name: hero.last_name.to_string(),
                password: String::new(), // hash passed separately
            },
            &password_hash,
        )?;

        // Attach the profile to its team and fill in the bio
        let profile = db
            .list_profiles()?
            .into_iter()
            .find(|p| p.account.id == account.id)
            .expect("profile created during registration");
        db.update_profile(
            profile.id,
            &ProfilePatch {
                email: None,
                team_id: Some(teams[hero.team].id),
                bio: Some(hero.bio.to_string()),
                profile_picture: None,
                total_calories_burned: Some(1200.0 + 300.0 * i as f64),
                total_distance: Some(40.0 + 10.0 * i as f64),
                total_workouts: Some(10 + i as i64),
            },
        )?;

        // A few activities per hero, varying type and effort
        for (j, (activity_type, distance)) in activity_types.iter().enumerate() {
            let activity = db.create_activity(&NewActivity {
                account_id: account.id,
                activity_type: *activity_type,
                duration_minutes: 30 + 15 * j as i64,
                distance_km: *distance,
                calories: 250.0 + 50.0 * j as f64,
                intensity: if j % 2 == 0 {
                    Intensity::High
                } else {
                    Intensity::Medium
                },
                notes: String::new(),
            })?;
            // Backdate nothing; note the session number instead
            db.update_activity(
                activity.id,
                &ActivityPatch {
                    activity_type: None,
                    duration_minutes: None,
                    distance_km: None,
                    calories: None,
                    intensity: None,
                    notes: Some(format!("Training session {}", j + 1)),
                },
            )?;
        }

        // Points and team on the leaderboard entry created at registration
        let entry = db
            .list_leaderboard_entries()?
            .into_iter()
            .find(|e| e.account_id == account.id)
            .expect("leaderboard entry created during registration");
        db.update_leaderboard_entry(
            entry.id,
            &LeaderboardPatch {
                rank: Some(i as i64 + 1),
                total_points: Some(hero.points),
                total_activities: Some(activity_types.len() as i64),
                team_id: Some(teams[hero.team].id),
            },
        )?;

        println!("Seeded {} ({})", hero.username, teams[hero.team].name);
    }

    let workouts = [
        NewWorkout {
            name: "Morning Mobility".to_string(),
            description: "Gentle full-body wake-up".to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: 20,
            exercises: vec!["Cat-Cow".to_string(), "Lunge Stretch".to_string()],
            target_muscle_groups: vec!["Back".to_string(), "Hips".to_string()],
            calories_estimate: 90.0,
        },
        NewWorkout {
            name: "Tempo Intervals".to_string(),
            description: "Alternating pace endurance work".to_string(),
            difficulty: Difficulty::Intermediate,
            duration_minutes: 45,
            exercises: vec!["Warmup Jog".to_string(), "400m Repeats".to_string()],
            target_muscle_groups: vec!["Legs".to_string(), "Core".to_string()],
            calories_estimate: 420.0,
        },
        NewWorkout {
            name: "Superhero Strength Training".to_string(),
            description: "Build incredible strength".to_string(),
            difficulty: Difficulty::Advanced,
            duration_minutes: 90,
            exercises: vec![
                "Bench Press".to_string(),
                "Squats".to_string(),
                "Deadlifts".to_string(),
            ],
            target_muscle_groups: vec![
                "Chest".to_string(),
                "Legs".to_string(),
                "Back".to_string(),
            ],
            calories_estimate: 600.0,
        },
    ];
    for workout in &workouts {
        db.create_workout(workout)?;
    }
    println!("Seeded {} workout plans", workouts.len());

    println!("Done.");
    Ok(())
}
