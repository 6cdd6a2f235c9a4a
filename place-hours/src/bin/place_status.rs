use std::env;
use std::fs;

use chrono::{Local, Utc};

use place_hours::{Context, DisplayOptions, Place, WeekStart};

fn main() {
    let path = env::args()
        .nth(1)
        .expect("Usage: ./place-status <PLACES.json> [OPTIONS.json]");

    let places: Vec<Place> = {
        let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("{path}: {err}"));
        serde_json::from_str(&raw).unwrap_or_else(|err| panic!("{path}: {err}"))
    };

    let options: DisplayOptions = match env::args().nth(2) {
        None => DisplayOptions::default(),
        Some(path) => {
            let raw = fs::read_to_string(&path).unwrap_or_else(|err| panic!("{path}: {err}"));
            serde_json::from_str(&raw).unwrap_or_else(|err| panic!("{path}: {err}"))
        }
    };

    println!(" - date: {}", Local::now().format("%A, %-d %B, %C%y %H:%M"));

    for place in &places {
        println!("---");
        println!("{}:", place.name);

        // Places listing their UTC offset are evaluated in their own local time
        let description = match place.location() {
            Some(location) => {
                let now = Utc::now().with_timezone(location.get_timezone());
                let ctx = Context::default().with_locale(location);
                place.status(now, &ctx).describe(&now, &options)
            }
            None => {
                let now = Local::now().naive_local();
                place.status(now, &Context::default()).describe(&now, &options)
            }
        };

        println!(" - status: {description}");

        match place.schedule(&Context::default()) {
            None => println!(" (no listed hours)"),
            Some(Err(err)) => println!(" (invalid hours: {err})"),
            Some(Ok(schedule)) => {
                for (day, hours) in schedule.iter(WeekStart::Monday) {
                    println!(" - {day}: {} - {}", hours.open, hours.close);
                }
            }
        }
    }
}
