// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where was Venus in the sky over Washington on 1987 April 10 at 19:21 UT?
//! (Meeus, "Astronomical Algorithms", example 13.b.)

use vela::{
    equatorial, geographical, hour_angle, sidereal_time, to_equatorial, to_horizontal, Angle,
    JulianDate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let venus = equatorial(
        Angle::parse_hms("23:09:16.641")?,
        Angle::parse_dms("-6:43:11.61")?,
    )?;
    let washington = geographical(
        Angle::make_degrees(-77.0, 3.0, 56.0),
        Angle::make_degrees(38.0, 55.0, 17.0),
    )?;
    let jd = JulianDate::from_calendar_hms(1987, 4, 10, 19, 21, 0.0)?;

    println!("Date:        {jd} ({})", jd.to_epoch());
    println!("Observer:    {washington}");
    println!("Venus:       {venus}");
    println!("GMST:        {}", sidereal_time(jd));
    println!("LST:         {}", washington.local_sidereal_time(jd));
    println!("Hour angle:  {}", hour_angle(venus, washington, jd).to_degrees());

    let hz = to_horizontal(venus, washington, jd);
    println!("Azimuth:     {}", hz.azimuth());
    println!("Altitude:    {}", hz.altitude());

    let back = to_equatorial(hz, washington, jd);
    println!("And back:    {back}");

    let now = JulianDate::now()?;
    println!(
        "Right now Venus (at the same RA/Dec) is at {}",
        to_horizontal(venus, washington, now)
    );

    Ok(())
}
