// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Time and coordinate transform benchmarks

use criterion::*;
use vela::{
    equatorial, geographical, sidereal_time, to_equatorial, to_horizontal, Angle, JulianDate,
    RADec,
};

fn transform(c: &mut Criterion) {
    let jd = JulianDate::from_calendar_hms(1987, 4, 10, 19, 21, 0.0).unwrap();
    let loc = geographical(
        Angle::make_degrees(-77.0, 3.0, 56.0),
        Angle::make_degrees(38.0, 55.0, 17.0),
    )
    .unwrap();
    let eq = equatorial(
        Angle::make_hours(23.0, 9.0, 16.641),
        Angle::make_degrees(-6.0, 43.0, 11.61),
    )
    .unwrap();

    c.bench_function("JulianDate::from_calendar", |b| {
        b.iter(|| JulianDate::from_calendar(black_box(1987), 4, 10, black_box(69660.0)))
    });

    c.bench_function("sidereal_time", |b| {
        b.iter(|| sidereal_time(black_box(jd)))
    });

    c.bench_function("to_horizontal", |b| {
        b.iter(|| to_horizontal(black_box(eq), loc, jd))
    });

    c.bench_function("to_horizontal and back", |b| {
        b.iter(|| to_equatorial(to_horizontal(black_box(eq), loc, jd), loc, jd))
    });

    // A sky's worth of sources at once.
    c.bench_function("to_horizontal 10000 sources", |b| {
        let sources: Vec<RADec> = (0..10000)
            .map(|i| {
                let i = f64::from(i);
                RADec::from_degrees(i * 0.036, (i * 0.018) - 90.0).unwrap()
            })
            .collect();
        b.iter(|| {
            let _hz: Vec<_> = sources
                .iter()
                .map(|&s| black_box(to_horizontal(s, loc, jd)))
                .collect();
        })
    });
}

criterion_group!(benches, transform);
criterion_main!(benches);
