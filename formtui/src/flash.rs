//! Auto-fading status line.
//!
//! A flash message stays on screen for a fixed duration and fades into the
//! background over the last part of it. Showing a message restarts the
//! timer, including when the text is identical, so repeated feedback (a
//! limit warning clicked twice, say) stays visible.

use std::time::{Duration, Instant};

use palette::{IntoColor, Oklch, Srgb};
use selectdom::Rgb;

const DISPLAY: Duration = Duration::from_millis(2400);
const FADE: Duration = Duration::from_millis(800);

#[derive(Debug, Default)]
pub struct Flash {
    message: String,
    shown_at: Option<Instant>,
}

impl Flash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message and restart the display timer.
    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message.into(), Instant::now());
    }

    /// The current message, or `None` once it has expired.
    pub fn message(&self) -> Option<&str> {
        self.message_at(Instant::now())
    }

    /// Foreground color for the message, blended toward `bg` while fading.
    pub fn color(&self, fg: Rgb, bg: Rgb) -> Rgb {
        blend(fg, bg, self.fade_factor_at(Instant::now()))
    }

    fn show_at(&mut self, message: String, now: Instant) {
        self.message = message;
        self.shown_at = Some(now);
    }

    fn message_at(&self, now: Instant) -> Option<&str> {
        let shown_at = self.shown_at?;
        if now.duration_since(shown_at) < DISPLAY {
            Some(&self.message)
        } else {
            None
        }
    }

    /// 0.0 while fully visible, rising to 1.0 at expiry.
    fn fade_factor_at(&self, now: Instant) -> f32 {
        let Some(shown_at) = self.shown_at else {
            return 1.0;
        };
        let elapsed = now.duration_since(shown_at);
        if elapsed >= DISPLAY {
            return 1.0;
        }
        let fade_start = DISPLAY - FADE;
        if elapsed <= fade_start {
            return 0.0;
        }
        (elapsed - fade_start).as_secs_f32() / FADE.as_secs_f32()
    }
}

/// Blend two colors in OKLCH space, taking the shortest path around the
/// hue circle.
fn blend(from: Rgb, to: Rgb, t: f32) -> Rgb {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }

    let (from_l, from_c, from_h) = to_oklch(from);
    let (to_l, to_c, to_h) = to_oklch(to);

    let l = from_l + (to_l - from_l) * t;
    let c = from_c + (to_c - from_c) * t;

    let mut dh = to_h - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    let h = (from_h + dh * t).rem_euclid(360.0);

    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    Rgb::new(
        (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

fn to_oklch(color: Rgb) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
    );
    let oklch: Oklch = srgb.into_color();
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires_after_display_duration() {
        let mut flash = Flash::new();
        let t0 = Instant::now();
        flash.show_at("saved".to_string(), t0);

        assert_eq!(flash.message_at(t0), Some("saved"));
        assert_eq!(flash.message_at(t0 + Duration::from_millis(2000)), Some("saved"));
        assert_eq!(flash.message_at(t0 + Duration::from_millis(2500)), None);
    }

    #[test]
    fn test_showing_same_message_restarts_timer() {
        let mut flash = Flash::new();
        let t0 = Instant::now();
        flash.show_at("saved".to_string(), t0);

        let t1 = t0 + Duration::from_millis(2000);
        flash.show_at("saved".to_string(), t1);
        assert_eq!(flash.message_at(t0 + Duration::from_millis(3000)), Some("saved"));
        assert_eq!(flash.message_at(t1 + Duration::from_millis(2500)), None);
    }

    #[test]
    fn test_fade_factor_shape() {
        let mut flash = Flash::new();
        assert_eq!(flash.fade_factor_at(Instant::now()), 1.0);

        let t0 = Instant::now();
        flash.show_at("saved".to_string(), t0);
        assert_eq!(flash.fade_factor_at(t0), 0.0);
        assert_eq!(flash.fade_factor_at(t0 + Duration::from_millis(1600)), 0.0);

        let mid = flash.fade_factor_at(t0 + Duration::from_millis(2000));
        assert!(mid > 0.4 && mid < 0.6);
        assert_eq!(flash.fade_factor_at(t0 + Duration::from_millis(2400)), 1.0);
    }

    fn close(a: Rgb, b: Rgb) -> bool {
        a.r.abs_diff(b.r) <= 2 && a.g.abs_diff(b.g) <= 2 && a.b.abs_diff(b.b) <= 2
    }

    #[test]
    fn test_blend_endpoints() {
        let fg = Rgb::new(220, 223, 228);
        let bg = Rgb::new(30, 33, 40);
        assert_eq!(blend(fg, bg, 0.0), fg);
        assert_eq!(blend(fg, bg, 1.0), bg);
        assert!(close(blend(fg, fg, 0.5), fg));
    }

    #[test]
    fn test_blend_midpoint_is_between() {
        let fg = Rgb::new(220, 223, 228);
        let bg = Rgb::new(30, 33, 40);
        let mid = blend(fg, bg, 0.5);
        assert!(mid.r < fg.r && mid.r > bg.r);
    }
}
