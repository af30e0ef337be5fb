//! Frame math for the decorative widgets. Everything here is a pure function
//! of milliseconds elapsed since the widget mounted.

// Radar: 0.6 degrees every 30 ms.
const SWEEP_DEG_PER_MS: f64 = 0.02;
const SCAN_TRAIL_DEG: f64 = 60.0;

pub const SWEEP_PERIOD_MS: f64 = 4500.0;
pub const BLIP_PING_MS: f64 = 900.0;
pub const BLIP_STAGGER_MS: f64 = 400.0;

pub fn sweep_rotation(elapsed_ms: f64) -> f64 {
    (elapsed_ms.max(0.0) * SWEEP_DEG_PER_MS).rem_euclid(360.0)
}

/// True while the sweep arm has passed `blip_angle` within the last 60 degrees.
pub fn is_scanned(rotation: f64, blip_angle: f64) -> bool {
    (rotation - blip_angle + 360.0).rem_euclid(360.0) < SCAN_TRAIL_DEG
}

/// Staggered ping loop: blip `index` lights up `index * 400` ms into every
/// sweep period, for 900 ms.
pub fn blip_pinging(index: usize, elapsed_ms: f64) -> bool {
    let start = index as f64 * BLIP_STAGGER_MS;
    let since = elapsed_ms - start;
    if since < 0.0 {
        return false;
    }
    since.rem_euclid(SWEEP_PERIOD_MS) < BLIP_PING_MS
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudReadout {
    pub offset: f64,
    pub ladder_shift_px: f64,
    pub altitude_ft: f64,
    pub speed_kts: f64,
}

pub fn hud_readout(elapsed_ms: f64) -> HudReadout {
    // 0.5 units every 50 ms, wrapping at 100.
    let offset = ((elapsed_ms.max(0.0) / 50.0).floor() * 0.5).rem_euclid(100.0);
    HudReadout {
        offset,
        ladder_shift_px: offset.rem_euclid(40.0) - 20.0,
        altitude_ft: 25_000.0 + offset,
        speed_kts: 450.0 + offset / 10.0,
    }
}

pub const TICKER_PERIOD_MS: f64 = 5000.0;
pub const TICKER_FADE_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerFrame {
    pub index: usize,
    pub visible: bool,
}

/// Which alert the ticker shows and whether it is mid-fade.
pub fn ticker_frame(elapsed_ms: f64, alert_count: usize) -> TickerFrame {
    if alert_count == 0 {
        return TickerFrame { index: 0, visible: false };
    }
    let elapsed = elapsed_ms.max(0.0);
    let cycle = (elapsed / TICKER_PERIOD_MS).floor();
    let into_cycle = elapsed - cycle * TICKER_PERIOD_MS;
    let fading = cycle >= 1.0 && into_cycle < TICKER_FADE_MS;
    // The next alert swaps in once the fade gap has elapsed.
    let shown_cycle = if fading { cycle - 1.0 } else { cycle };
    TickerFrame {
        index: (shown_cycle as usize) % alert_count,
        visible: !fading,
    }
}

pub const PIPELINE_STEP_MS: f64 = 4500.0;

/// Active pipeline step, cycling from `start_step`.
pub fn pipeline_step(elapsed_ms: f64, start_step: usize, step_count: usize) -> usize {
    if step_count == 0 {
        return 0;
    }
    let advanced = (elapsed_ms.max(0.0) / PIPELINE_STEP_MS).floor() as usize;
    (start_step + advanced) % step_count
}

/// Width of the highlighted connector, as a percentage of the track.
pub fn pipeline_progress_percent(active: usize, step_count: usize) -> f64 {
    if step_count < 2 {
        return 0.0;
    }
    active.min(step_count - 1) as f64 / (step_count - 1) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_wraps_every_eighteen_seconds() {
        assert_eq!(sweep_rotation(0.0), 0.0);
        assert!((sweep_rotation(1500.0) - 30.0).abs() < 1e-9);
        let full_turn = sweep_rotation(18_000.0);
        assert!(full_turn < 1e-6 || 360.0 - full_turn < 1e-6);
        assert!((sweep_rotation(18_000.0 + 3000.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn blip_is_lit_just_behind_the_arm() {
        assert!(is_scanned(50.0, 45.0));
        assert!(!is_scanned(40.0, 45.0));
        assert!(!is_scanned(110.0, 45.0));
        // Wraps across north.
        assert!(is_scanned(10.0, 330.0));
    }

    #[test]
    fn blips_ping_in_stagger_order() {
        assert!(blip_pinging(0, 0.0));
        assert!(!blip_pinging(1, 0.0));
        assert!(blip_pinging(1, 450.0));
        assert!(!blip_pinging(0, 950.0));
        assert!(blip_pinging(0, SWEEP_PERIOD_MS + 100.0));
        assert!(blip_pinging(2, SWEEP_PERIOD_MS + 800.0 + 10.0));
    }

    #[test]
    fn hud_ladder_stays_within_twenty_pixels() {
        for ms in (0..20_000).step_by(50) {
            let hud = hud_readout(ms as f64);
            assert!(hud.offset < 100.0);
            assert!((-20.0..20.0).contains(&hud.ladder_shift_px));
        }
        let hud = hud_readout(1000.0);
        assert_eq!(hud.offset, 10.0);
        assert_eq!(hud.altitude_ft, 25_010.0);
        assert_eq!(hud.speed_kts, 451.0);
    }

    #[test]
    fn ticker_rotates_with_a_fade_gap() {
        assert_eq!(ticker_frame(0.0, 6), TickerFrame { index: 0, visible: true });
        assert_eq!(ticker_frame(4999.0, 6), TickerFrame { index: 0, visible: true });
        assert_eq!(ticker_frame(5200.0, 6), TickerFrame { index: 0, visible: false });
        assert_eq!(ticker_frame(5500.0, 6), TickerFrame { index: 1, visible: true });
        assert_eq!(ticker_frame(30_600.0, 6), TickerFrame { index: 0, visible: true });
    }

    #[test]
    fn empty_ticker_shows_nothing() {
        assert!(!ticker_frame(100.0, 0).visible);
    }

    #[test]
    fn pipeline_cycles_from_the_selected_step() {
        assert_eq!(pipeline_step(0.0, 0, 4), 0);
        assert_eq!(pipeline_step(4500.0, 0, 4), 1);
        assert_eq!(pipeline_step(4500.0 * 4.0, 0, 4), 0);
        assert_eq!(pipeline_step(100.0, 3, 4), 3);
        assert_eq!(pipeline_step(4600.0, 3, 4), 0);
        assert_eq!(pipeline_progress_percent(0, 4), 0.0);
        assert_eq!(pipeline_progress_percent(3, 4), 100.0);
    }
}
