use approx::assert_abs_diff_eq;
use hifitime::Epoch;
use julian_dates::functions::{jd_to_mjd, jd_to_rjdn, mjd_to_jd, mjd_to_tjd};
use julian_dates::Flavour;

#[test]
fn test_jd_mjd_agree_with_hifitime() {
    let epochs = [
        Epoch::from_gregorian_utc_at_midnight(2021, 1, 1),
        Epoch::from_gregorian_utc_at_noon(2006, 5, 29),
        Epoch::from_gregorian_utc_hms(1968, 5, 24, 0, 0, 0),
        Epoch::from_gregorian_utc_hms(1858, 11, 17, 0, 0, 0),
    ];

    for epoch in epochs {
        let jd = epoch.to_jde_utc_days();
        let mjd = epoch.to_mjd_utc_days();
        assert_abs_diff_eq!(jd_to_mjd(jd), mjd, epsilon = 1e-9);
        assert_abs_diff_eq!(mjd_to_jd(mjd), jd, epsilon = 1e-9);
    }
}

#[test]
fn test_mjd_to_jd_from_hifitime_dates() {
    let mjd = [59215.0, 59216.0];
    let jd: Vec<f64> = mjd.iter().map(|x| mjd_to_jd(*x)).collect();
    assert_eq!(jd, vec![2459215.5, 2459216.5]);

    for (m, j) in mjd.iter().zip(jd) {
        assert_abs_diff_eq!(
            Epoch::from_mjd_utc(*m).to_jde_utc_days(),
            j,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_epochs_fall_on_their_dates() {
    // MJD day 0 starts at 1858-11-17 00:00 UTC.
    let mjd_epoch = Epoch::from_gregorian_utc_at_midnight(1858, 11, 17);
    assert_abs_diff_eq!(jd_to_mjd(mjd_epoch.to_jde_utc_days()), 0.0, epsilon = 1e-9);

    // TJD day 0 starts at 1968-05-24 00:00 UTC.
    let tjd_epoch = Epoch::from_gregorian_utc_at_midnight(1968, 5, 24);
    assert_abs_diff_eq!(
        mjd_to_tjd(tjd_epoch.to_mjd_utc_days()),
        0.0,
        epsilon = 1e-9
    );

    assert_abs_diff_eq!(
        tjd_epoch.to_jde_utc_days(),
        Flavour::Tjd.epoch_offset::<f64>(),
        epsilon = 1e-9
    );
}

#[test]
fn test_rjd_day_number_changes_at_noon() {
    let morning = Epoch::from_gregorian_utc_hms(2006, 5, 29, 6, 0, 0);
    let afternoon = Epoch::from_gregorian_utc_hms(2006, 5, 29, 18, 0, 0);
    assert_eq!(jd_to_rjdn(morning.to_jde_utc_days()), 53_884.0);
    assert_eq!(jd_to_rjdn(afternoon.to_jde_utc_days()), 53_885.0);
}
