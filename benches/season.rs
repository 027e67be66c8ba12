// benches/season.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use drive_chart::{accumulate, csv::parse_table, map_spot, parse, rows_for_week, weeks_of};

const HEADER: &str = "Week Number,Team,Started: Spot,Ended: Spot,Ended: How,scoring_team,Scoring Play,Date,Site,Temperature,Weather";

/// Synthetic season: 15 weeks × 24 drives, alternating possession.
fn synthetic_season() -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for week in 1..=15 {
        for drive in 0..24 {
            let (team, opp) = if drive % 2 == 0 { ("MER", "OPP") } else { ("OPP", "MER") };
            let (how, scorer) = match drive % 5 {
                0 => ("TD", team),
                1 => ("FG", "NULL"),
                _ => ("PUNT", "NULL"),
            };
            text.push_str(&format!(
                "{week},{team},{team}{},{opp}{},{how},{scorer},\"{team} - play, {drive}\",9/{week}/2024,\"Stadium, City\",70,Clear\n",
                20 + drive % 30,
                drive % 50,
            ));
        }
    }
    text
}

fn bench_season(c: &mut Criterion) {
    let text = synthetic_season();
    let drives = parse(&text);
    let weeks = weeks_of(&drives);

    c.bench_function("parse_table", |b| {
        b.iter(|| black_box(parse_table(black_box(&text))).row_count())
    });

    c.bench_function("accumulate_all_weeks", |b| {
        b.iter(|| {
            let mut n = 0;
            for w in &weeks {
                let rows = rows_for_week(&drives, w);
                n += accumulate(black_box(&rows)).len();
            }
            black_box(n)
        })
    });

    c.bench_function("map_spot", |b| {
        b.iter(|| {
            drives.iter()
                .filter_map(|d| map_spot(black_box(d.ended_spot.as_deref())))
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_season);
criterion_main!(benches);
